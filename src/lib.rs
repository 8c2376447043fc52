//! # decicalc
//!
//! decicalc is an arithmetic expression calculator written in Rust.
//! It parses one-line expressions over decimal literals (with optional
//! thousands separators), evaluates them with arbitrary-precision decimal
//! arithmetic and formats the result with grouped digits.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::Diagnostic,
    interpreter::{
        builder::build,
        evaluator::core::Context,
        format::format_decimal,
        lexer::tokenize,
        parser::core::parse_tokens,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The AST is built from the
/// parse tree and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of expression nodes and operators.
/// - Attaches source spans to AST nodes for error reporting.
/// - Renders trees in fully parenthesized form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating a line. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source columns for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches columns and grammar rule traces for context.
/// - Renders diagnostics with the source line and a caret marker.
pub mod error;
/// Orchestrates the entire process of evaluating a line.
///
/// This module ties together lexing, parsing, building, evaluation, the
/// decimal value type and result formatting.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, builder, evaluator,
///   value and formatter.
/// - Provides stage-level entry points for parsing and evaluating input.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides reusable helpers and conversion routines that are used
/// by the decimal arithmetic and the evaluator.
///
/// # Responsibilities
/// - Safely convert between `BigInt`, `i64` and `u32` without silent data
///   loss.
/// - Provide powers of ten and digit counts.
pub mod util;

/// Evaluates one line with the default configuration and formats the result.
///
/// # Errors
/// Returns a [`Diagnostic`] if the line does not parse or cannot be
/// evaluated. It renders the line, a caret under the failing column and the
/// error message.
///
/// # Examples
/// ```
/// use decicalc::evaluate_line;
///
/// assert_eq!(evaluate_line("1,234.50 + 1").unwrap(), "1,235.5");
/// assert_eq!(evaluate_line("2**3**2").unwrap(), "64");
///
/// // Division by zero names the divisor.
/// let diagnostic = evaluate_line("5/(2-2)").unwrap_err();
/// assert!(diagnostic.to_string().contains("'(2 - 2)' evaluates to 0"));
/// ```
pub fn evaluate_line(text: &str) -> Result<String, Diagnostic> {
    evaluate_line_with(&Context::new(), text)
}

/// Evaluates one line with an explicit configuration and formats the result.
///
/// Each call builds its own tokens and trees; nothing is kept between calls.
/// A trailing line terminator is ignored.
///
/// # Errors
/// See [`evaluate_line`].
///
/// # Examples
/// ```
/// use decicalc::{evaluate_line_with, interpreter::evaluator::core::Context};
///
/// let context = Context::new().with_division_scale(3);
/// assert_eq!(evaluate_line_with(&context, "10/3").unwrap(), "3.333");
///
/// let context = Context::new().with_max_exponent(3);
/// assert!(evaluate_line_with(&context, "2**4").is_err());
/// ```
pub fn evaluate_line_with(context: &Context, text: &str) -> Result<String, Diagnostic> {
    let line = text.trim_end_matches(['\r', '\n']);
    debug!(line, "evaluating line");

    let tokens = tokenize(line).map_err(|e| Diagnostic::new(line, e))?;
    let tree = parse_tokens(&tokens, line.len()).map_err(|e| Diagnostic::new(line, e))?;
    let expr = build(tree);
    let value = context.eval(&expr).map_err(|e| Diagnostic::new(line, e))?;

    Ok(format_decimal(&value))
}
