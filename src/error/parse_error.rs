use std::fmt;

/// Represents everything that can go wrong while lexing or parsing a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The lexer found text that does not start any token.
    UnexpectedCharacter {
        /// The offending slice of input.
        found: String,
    },
    /// Found a token that none of the grammar alternatives accept.
    UnexpectedToken {
        /// The token encountered.
        found:    String,
        /// The alternatives that would have been accepted.
        expected: Vec<&'static str>,
    },
    /// Reached the end of input in the middle of an expression.
    UnexpectedEndOfInput {
        /// The alternatives that would have been accepted.
        expected: Vec<&'static str>,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// What was found instead, `None` at end of input.
        found:       Option<String>,
        /// Column of the unmatched `(`.
        open_column: usize,
    },
    /// A complete expression was followed by more input.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
    },
    /// The line contained no tokens at all.
    EmptyInput,
    /// The expression nests deeper than the parser accepts.
    TooDeep {
        /// The largest accepted nesting depth.
        max: usize,
    },
}

/// One grammar rule that was being matched when parsing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleFrame {
    /// Name of the production, e.g. `term`.
    pub rule:   &'static str,
    /// Column where the rule started matching.
    pub column: usize,
}

/// A parse failure with its position and the chain of rules that led to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong.
    pub kind:   ParseErrorKind,
    /// One-based column of the failure.
    pub column: usize,
    /// The rules being matched, innermost first.
    pub trace:  Vec<RuleFrame>,
}

impl ParseError {
    /// Creates an error with an empty rule trace.
    #[must_use]
    pub const fn new(kind: ParseErrorKind, column: usize) -> Self {
        Self { kind,
               column,
               trace: Vec::new() }
    }

    /// Records that the failure happened while matching `rule`, which started
    /// at `column`.
    ///
    /// Rules call this as the error unwinds, so the trace ends up ordered from
    /// the innermost production out to `expr`.
    ///
    /// ## Example
    /// ```
    /// use decicalc::error::{ParseError, ParseErrorKind};
    ///
    /// let err = ParseError::new(ParseErrorKind::EmptyInput, 1).within("primary", 1)
    ///                                                         .within("expr", 1);
    ///
    /// let rules: Vec<_> = err.trace.iter().map(|frame| frame.rule).collect();
    /// assert_eq!(rules, ["primary", "expr"]);
    /// ```
    #[must_use]
    pub fn within(mut self, rule: &'static str, column: usize) -> Self {
        self.trace.push(RuleFrame { rule, column });
        self
    }

    /// The alternatives the parser would have accepted at the failure point.
    #[must_use]
    pub fn expected(&self) -> &[&'static str] {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. }
            | ParseErrorKind::UnexpectedEndOfInput { expected } => expected.as_slice(),
            ParseErrorKind::ExpectedClosingParen { .. } => &["')'"][..],
            _ => &[],
        }
    }
}

/// Joins alternatives as `a`, `a or b`, or `a, b or c`.
fn describe_alternatives(expected: &[&str]) -> String {
    match expected {
        [] => "more input".to_string(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter { found } => write!(f, "Unexpected character '{found}'"),
            Self::UnexpectedToken { found, expected } => {
                write!(f,
                       "Expected {}, found '{found}'",
                       describe_alternatives(expected))
            },
            Self::UnexpectedEndOfInput { expected } => {
                write!(f,
                       "Expected {}, found end of input",
                       describe_alternatives(expected))
            },
            Self::ExpectedClosingParen { found: Some(found),
                                         open_column, } => write!(f,
                                                                  "Expected ')' to close '(' at column {open_column}, found '{found}'"),
            Self::ExpectedClosingParen { found: None,
                                         open_column, } => write!(f,
                                                                  "Expected ')' to close '(' at column {open_column}, found end of input"),
            Self::UnexpectedTrailingTokens { token } => {
                write!(f, "Extra input after expression: '{token}'")
            },
            Self::EmptyInput => write!(f, "Nothing to evaluate"),
            Self::TooDeep { max } => {
                write!(f, "Expression nests more than {max} levels deep")
            },
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error at column {}: {}.", self.column, self.kind)?;
        for frame in &self.trace {
            write!(f,
                   "\n  while parsing {} starting at column {}",
                   frame.rule, frame.column)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
