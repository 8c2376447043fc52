use tracing::trace;

use crate::{
    ast::UnaryOperator,
    interpreter::{evaluator::core::Context, value::decimal::Decimal},
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Negation cannot fail: it flips the sign and keeps the scale.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The computed `Decimal`.
    ///
    /// # Example
    /// ```
    /// use decicalc::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::decimal::Decimal},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, Decimal::new(125, 2));
    /// assert_eq!(v.to_string(), "-1.25");
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: Decimal) -> Decimal {
        let result = match op {
            UnaryOperator::Negate => -value,
        };
        trace!(%op, %result, "unary operation");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negating_zero_stays_zero() {
        let v = Context::eval_unary(UnaryOperator::Negate, Decimal::zero());

        assert!(v.is_zero());
        assert_eq!(v.to_string(), "0");
    }

    #[test]
    fn double_negation_restores_value() {
        let once = Context::eval_unary(UnaryOperator::Negate, Decimal::from(7));
        let twice = Context::eval_unary(UnaryOperator::Negate, once);

        assert_eq!(twice, Decimal::from(7));
    }
}
