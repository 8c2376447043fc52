use std::fmt;

use crate::error::{ParseError, RuntimeError};

/// Either stage of failure a line can hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line is not a well-formed expression.
    Parse(ParseError),
    /// The expression is well-formed but cannot be evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

/// A failure together with the line that caused it, ready for display.
///
/// Rendering shows the source, a caret under the failing column and the
/// error message (including the rule trace for parse errors):
///
/// ```text
/// (1+2
///     ^
/// Error at column 5: Expected ')' to close '(' at column 1, found end of input.
///   while parsing primary starting at column 1
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    source: String,
    error:  Error,
}

impl Diagnostic {
    /// Wraps `error` with the `source` line it was produced from.
    pub fn new(source: &str, error: impl Into<Error>) -> Self {
        Self { source: source.trim_end_matches(['\r', '\n']).to_string(),
               error:  error.into(), }
    }

    /// The underlying error.
    #[must_use]
    pub const fn error(&self) -> &Error {
        &self.error
    }

    /// The line the error refers to.
    #[must_use]
    pub fn source_line(&self) -> &str {
        &self.source
    }

    /// One-based column the diagnostic points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match &self.error {
            Error::Parse(e) => e.column,
            Error::Runtime(e) => e.column(),
        }
    }

    /// Returns `true` if the line failed to parse.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self.error, Error::Parse(_))
    }

    /// Returns `true` if the line parsed but failed to evaluate.
    #[must_use]
    pub const fn is_runtime_error(&self) -> bool {
        matches!(self.error, Error::Runtime(_))
    }

    fn caret_line(&self) -> String {
        let mut marker: String = self.source
                                     .chars()
                                     .take(self.column().saturating_sub(1))
                                     .map(|c| if c == '\t' { '\t' } else { ' ' })
                                     .collect();
        marker.push('^');
        marker
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.source)?;
        writeln!(f, "{}", self.caret_line())?;
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for Diagnostic {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    #[test]
    fn caret_points_at_column() {
        let err = ParseError::new(ParseErrorKind::UnexpectedCharacter { found: "x".to_string() },
                                  3);
        let diagnostic = Diagnostic::new("1+x\n", err);

        assert!(diagnostic.is_parse_error());
        assert_eq!(diagnostic.to_string(),
                   "1+x\n  ^\nError at column 3: Unexpected character 'x'.");
    }

    #[test]
    fn caret_keeps_tabs_aligned() {
        let err = RuntimeError::DivisionByZero { divisor: "0".to_string(),
                                                 column:  5, };
        let diagnostic = Diagnostic::new("5\t/ 0", err);

        assert!(diagnostic.is_runtime_error());
        assert_eq!(diagnostic.caret_line(), " \t  ^");
    }
}
