use tracing::debug;

use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::parser::tree::{BaseTree, Chain, ExprTree, Link, Primary, Spanned},
};

/// Parse tree nodes that can be lowered into the AST.
///
/// Lowering consumes the parse tree; it is not needed once the AST exists.
pub trait Build {
    /// Converts `self` into an AST node.
    fn build(self) -> Expr;
}

/// Folds a chain to the left: `a op1 b op2 c` becomes `((a op1 b) op2 c)`.
///
/// This is the same loop for every precedence level, exponentiation included.
impl<T: Build> Build for Chain<T> {
    fn build(self) -> Expr {
        let mut acc = self.left.build();

        for Link { op, right, .. } in self.continuation {
            let right = right.build();
            let span = acc.span().to(right.span());
            acc = Expr::BinaryOp { left: Box::new(acc),
                                   op,
                                   right: Box::new(right),
                                   span };
        }

        acc
    }
}

impl Build for BaseTree {
    fn build(self) -> Expr {
        match self {
            Self::Negated { minus, operand } => {
                let span = minus.to(operand.span());
                Expr::UnaryOp { op: UnaryOperator::Negate,
                                expr: Box::new(operand.build()),
                                span }
            },
            Self::Plain(primary) => primary.build(),
        }
    }
}

impl Build for Primary {
    fn build(self) -> Expr {
        match self {
            Self::Number { text, span } => Expr::Num { value: text.replace(',', ""),
                                                       span },
            // Grouping only shapes the tree; it leaves no node behind.
            Self::Group { inner, .. } => inner.build(),
        }
    }
}

/// Lowers a parse tree into the AST.
///
/// The parser guarantees the tree is well formed, so lowering cannot fail.
///
/// # Example
/// ```
/// use decicalc::interpreter::{builder::build, parser::core::parse};
///
/// let ast = build(parse("10-3-2").unwrap());
/// assert_eq!(ast.to_string(), "((10 - 3) - 2)");
///
/// let ast = build(parse("1,234.50 * (2 + 3)").unwrap());
/// assert_eq!(ast.to_string(), "(1234.50 * (2 + 3))");
/// ```
#[must_use]
pub fn build(tree: ExprTree) -> Expr {
    let expr = tree.build();
    debug!(ast = %expr, "built syntax tree");
    expr
}
