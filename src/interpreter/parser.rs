/// Entry points and shared parser plumbing.
///
/// Turns a token list into a parse tree, enforces that the whole line is
/// consumed and resolves end-of-input positions in errors.
pub mod core;

/// Parse tree types.
///
/// Each binary precedence level is a head operand followed by the ordered
/// `(operator, operand)` links that continue it. The builder folds these into
/// the left-associative AST.
pub mod tree;

/// Binary operator levels.
///
/// Parses the `expr`, `term` and `factor` productions with one shared
/// chain-collecting loop.
pub mod binary;

/// Unary minus and primary expressions.
///
/// Handles negated bases, numeric literals and parenthesized groups.
pub mod unary;
