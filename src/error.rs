/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// input line: unexpected characters or tokens, unbalanced parentheses and
/// leftover input. Each error records the column it occurred at and the
/// grammar rules that were being matched.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a tree, such
/// as division by zero or an exponent the decimal arithmetic cannot honour
/// exactly.
pub mod runtime_error;
/// User-facing diagnostics.
///
/// Couples a parse or runtime error with the source line it came from so it
/// can be rendered with a caret under the failing column.
pub mod diagnostic;

pub use diagnostic::Diagnostic;
pub use parse_error::{ParseError, ParseErrorKind, RuleFrame};
pub use runtime_error::RuntimeError;
