use std::fmt;

use crate::ast::{BinaryOperator, Span};

/// Nodes that know which part of the source they were parsed from.
pub trait Spanned {
    /// The source range covered by the node.
    fn span(&self) -> Span;
}

/// Nodes that can bound how deeply the syntax tree built from them nests.
///
/// The bound counts one level per operator, per unary minus and per
/// parenthesized group. Evaluation recurses once per level, so the parser
/// rejects trees whose bound is too large.
pub trait Nested {
    /// Upper bound on the depth of the built syntax tree.
    fn depth(&self) -> usize;
}

/// One binary precedence level: a head operand and its continuation.
///
/// The grammar cannot say `expr := expr '+' term`, so it parses
/// `term ('+' term)*` instead and records the repetitions here in source
/// order. Associativity is decided later, when the builder folds the links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<T> {
    /// The first operand.
    pub left:         T,
    /// The operators and operands that follow, in source order.
    pub continuation: Vec<Link<T>>,
}

/// A single `(operator, operand)` step of a [`Chain`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<T> {
    /// The operator joining the accumulated chain and `right`.
    pub op:      BinaryOperator,
    /// Where the operator token sits.
    pub op_span: Span,
    /// The operand following the operator.
    pub right:   T,
}

/// `expr := term (('+' | '-') term)*`
pub type ExprTree = Chain<TermTree>;
/// `term := factor (('*' | '/') factor)*`
pub type TermTree = Chain<FactorTree>;
/// `factor := base ('**' base)*`
pub type FactorTree = Chain<BaseTree>;

/// `base := '-' primary | primary`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseTree {
    /// A primary preceded by unary minus.
    Negated {
        /// Where the `-` sits.
        minus:   Span,
        /// The negated primary.
        operand: Primary,
    },
    /// A primary on its own.
    Plain(Primary),
}

/// `primary := '(' expr ')' | number`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primary {
    /// A literal exactly as written, separators included.
    Number {
        /// Literal text, e.g. `1,234.50`.
        text: String,
        /// Location in the source line.
        span: Span,
    },
    /// A parenthesized expression.
    Group {
        /// The enclosed expression.
        inner: Box<ExprTree>,
        /// Location of the group, parentheses included.
        span:  Span,
    },
}

impl<T: Spanned> Spanned for Chain<T> {
    fn span(&self) -> Span {
        self.continuation
            .last()
            .map_or_else(|| self.left.span(),
                         |link| self.left.span().to(link.right.span()))
    }
}

impl Spanned for BaseTree {
    fn span(&self) -> Span {
        match self {
            Self::Negated { minus, operand } => minus.to(operand.span()),
            Self::Plain(primary) => primary.span(),
        }
    }
}

impl Spanned for Primary {
    fn span(&self) -> Span {
        match self {
            Self::Number { span, .. } | Self::Group { span, .. } => *span,
        }
    }
}

/// A chain folds into a left spine one level per link, below which sits its
/// deepest operand.
impl<T: Nested> Nested for Chain<T> {
    fn depth(&self) -> usize {
        let deepest = self.continuation
                          .iter()
                          .map(|link| link.right.depth())
                          .fold(self.left.depth(), usize::max);
        deepest + self.continuation.len()
    }
}

impl Nested for BaseTree {
    fn depth(&self) -> usize {
        match self {
            Self::Negated { operand, .. } => operand.depth() + 1,
            Self::Plain(primary) => primary.depth(),
        }
    }
}

impl Nested for Primary {
    fn depth(&self) -> usize {
        match self {
            Self::Number { .. } => 1,
            Self::Group { inner, .. } => inner.depth() + 1,
        }
    }
}

/// Renders a chain in its right-nested continuation shape, e.g.
/// `{left: 1, continuation: {op: '+', right: 2, continuation: nil}}`.
///
/// Levels without operators render as their operand alone, which keeps
/// `1` from turning into three nested wrappers.
impl<T: fmt::Display> fmt::Display for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.continuation.is_empty() {
            return write!(f, "{}", self.left);
        }
        write!(f, "{{left: {}, continuation: ", self.left)?;
        for link in &self.continuation {
            write!(f, "{{op: '{}', right: {}, continuation: ", link.op, link.right)?;
        }
        write!(f, "nil")?;
        for _ in 0..=self.continuation.len() {
            write!(f, "}}")?;
        }
        Ok(())
    }
}

impl fmt::Display for BaseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negated { operand, .. } => write!(f, "{{neg: {operand}}}"),
            Self::Plain(primary) => write!(f, "{primary}"),
        }
    }
}

impl fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { text, .. } => write!(f, "{{num: \"{text}\"}}"),
            Self::Group { inner, .. } => write!(f, "({inner})"),
        }
    }
}
