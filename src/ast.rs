use std::fmt;

/// A half-open range of byte offsets into the evaluated source line.
///
/// The lexer only accepts ASCII, so offsets double as zero-based character
/// positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Offset of the first byte.
    pub start: usize,
    /// Offset one past the last byte.
    pub end:   usize,
}

impl Span {
    /// Creates a span from `start` to `end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the smallest span covering both `self` and `other`.
    ///
    /// ## Example
    /// ```
    /// use decicalc::ast::Span;
    ///
    /// let joined = Span::new(0, 1).to(Span::new(4, 7));
    /// assert_eq!(joined, Span::new(0, 7));
    /// ```
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        let start = if self.start < other.start { self.start } else { other.start };
        let end = if self.end > other.end { self.end } else { other.end };
        Self { start, end }
    }

    /// One-based column of the first character, as shown in diagnostics.
    #[must_use]
    pub const fn column(self) -> usize {
        self.start + 1
    }
}

/// An abstract syntax tree node for an arithmetic expression.
///
/// The node set is closed: numbers, binary operations and unary negation.
/// Each node owns its children and records the span of source it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric literal with thousands separators already removed.
    Num {
        /// Literal digits, optionally with a single `.` (`1234.50`, `.5`).
        value: String,
        /// Location in the source line.
        span:  Span,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Location in the source line.
        span: Span,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Location in the source line.
        span:  Span,
    },
}

impl Expr {
    /// Gets the source span covered by `self`.
    ///
    /// ## Example
    /// ```
    /// use decicalc::ast::{Expr, Span};
    ///
    /// let expr = Expr::Num { value: "42".to_string(),
    ///                        span:  Span::new(3, 5), };
    ///
    /// assert_eq!(expr.span(), Span::new(3, 5));
    /// assert_eq!(expr.span().column(), 4);
    /// ```
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Num { span, .. } | Self::UnaryOp { span, .. } | Self::BinaryOp { span, .. } => {
                *span
            },
        }
    }
}

/// Renders the tree fully parenthesized, e.g. `((1 + 2) * (-3))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num { value, .. } => write!(f, "{value}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`**`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
