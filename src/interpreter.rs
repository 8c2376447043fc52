/// The lexer module tokenizes an input line for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens: numeric literals (optionally with thousands separators and a
/// fraction), the five arithmetic operators and parentheses. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input characters into tokens with their byte spans.
/// - Skips blank space between tokens.
/// - Reports lexical errors for characters outside the language.
pub mod lexer;
/// The parser module builds the parse tree from tokens.
///
/// The parser processes the token stream produced by the lexer and records
/// each precedence level as a head operand with its ordered continuation of
/// `(operator, operand)` links. It never recurses on the left.
///
/// # Responsibilities
/// - Validates the grammar, reporting errors with column and rule trace.
/// - Requires the whole line to form a single expression.
pub mod parser;
/// The builder module lowers parse trees into the AST.
///
/// Folds every continuation to the left so all binary operators, `**`
/// included, associate left, and strips separators from literals.
pub mod builder;
/// The evaluator module computes the value of an AST.
///
/// The evaluator walks the AST with exact decimal arithmetic, using the
/// configured division scale and exponent limit, and reports runtime errors
/// such as division by zero with the column they occurred at.
pub mod evaluator;
/// The value module defines the number type produced by evaluation.
pub mod value;
/// Human-readable rendering of results.
///
/// Groups the whole part in thousands and trims trailing fractional zeros;
/// also reads that rendering back.
pub mod format;
