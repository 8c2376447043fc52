#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum RuntimeError {
    /// Attempted division by zero, including a zero base raised to a negative
    /// power.
    DivisionByZero {
        /// The divisor as written, rendered from the tree.
        divisor: String,
        /// The source column of the divisor.
        column:  usize,
    },
    /// An exponent had a non-zero fractional part.
    UnsupportedExponent {
        /// The offending exponent value.
        exponent: String,
        /// The source column of the exponent.
        column:   usize,
    },
    /// An exponent was larger in magnitude than the configured maximum.
    ExponentTooLarge {
        /// The offending exponent value.
        exponent: String,
        /// The configured maximum magnitude.
        max:      u32,
        /// The source column of the exponent.
        column:   usize,
    },
    /// The result of an operation would have more digits than allowed.
    ResultTooLarge {
        /// Upper bound on the digits the result would have.
        digits: u64,
        /// The configured maximum.
        max:    u64,
        /// The source column of the operation.
        column: usize,
    },
    /// The number of fractional digits of a result no longer fits in a `u32`.
    ScaleOverflow {
        /// The source column of the operation.
        column: usize,
    },
    /// A literal could not be read as a decimal number.
    InvalidLiteral {
        /// The literal text.
        literal: String,
        /// The source column of the literal.
        column:  usize,
    },
}

impl RuntimeError {
    /// One-based source column the error points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::DivisionByZero { column, .. }
            | Self::UnsupportedExponent { column, .. }
            | Self::ExponentTooLarge { column, .. }
            | Self::ResultTooLarge { column, .. }
            | Self::ScaleOverflow { column }
            | Self::InvalidLiteral { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { divisor, column } => write!(f,
                                                               "Error at column {column}: Division by zero: '{divisor}' evaluates to 0."),
            Self::UnsupportedExponent { exponent, column } => write!(f,
                                                                     "Error at column {column}: Exponent {exponent} is not an integer."),
            Self::ExponentTooLarge { exponent,
                                     max,
                                     column, } => write!(f,
                                                         "Error at column {column}: Exponent {exponent} is too large. Maximum magnitude is {max}."),
            Self::ResultTooLarge { digits,
                                   max,
                                   column, } => write!(f,
                                                       "Error at column {column}: Result would have up to {digits} digits. Maximum is {max}."),
            Self::ScaleOverflow { column } => write!(f,
                                                     "Error at column {column}: Result has too many fractional digits to represent."),
            Self::InvalidLiteral { literal, column } => {
                write!(f, "Error at column {column}: Invalid number literal '{literal}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
