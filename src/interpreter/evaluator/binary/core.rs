use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr, Span},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::decimal::{ArithmeticError, Decimal},
    },
    util::num::digit_bound,
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Addition, subtraction and multiplication are exact. Division keeps
    /// [`Context::division_scale`] significant fractional digits when the
    /// quotient does not terminate. Power calls [`Context::eval_pow`].
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand value.
    /// - `right`: Right operand value.
    /// - `right_expr`: The right operand node, named by division errors.
    /// - `span`: Source span of the whole operation.
    ///
    /// # Returns
    /// An `EvalResult<Decimal>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use decicalc::{
    ///     ast::{BinaryOperator, Expr, Span},
    ///     interpreter::{evaluator::core::Context, value::decimal::Decimal},
    /// };
    ///
    /// let context = Context::new();
    /// let right = Expr::Num { value: "4".to_string(),
    ///                         span:  Span::new(2, 3), };
    ///
    /// let result = context.eval_binary(BinaryOperator::Div,
    ///                                  &Decimal::from(1),
    ///                                  &Decimal::from(4),
    ///                                  &right,
    ///                                  Span::new(0, 3));
    /// assert_eq!(result.unwrap().to_string(), "0.25");
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: &Decimal,
                       right: &Decimal,
                       right_expr: &Expr,
                       span: Span)
                       -> EvalResult<Decimal> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        let result = match op {
            Add => Ok(left + right),
            Sub => Ok(left - right),
            Mul => {
                let digits = digit_bound(left.significand()) + digit_bound(right.significand());
                self.check_result_size(digits, span)?;
                left.checked_mul(right)
                    .map_err(|e| Self::arithmetic_error(e, right_expr, span))
            },
            Div => left.checked_div(right, self.division_scale)
                       .map_err(|e| Self::arithmetic_error(e, right_expr, span)),
            Pow => self.eval_pow(left, right, right_expr, span),
        }?;

        trace!(%left, %op, %right, %result, "binary operation");
        Ok(result)
    }

    /// Rejects an operation whose result is estimated at more than
    /// [`Context::max_digits`] digits, before any arithmetic runs.
    ///
    /// # Errors
    /// Returns [`RuntimeError::ResultTooLarge`] pointing at `span`.
    pub(crate) fn check_result_size(&self, digits: u64, span: Span) -> EvalResult<()> {
        if digits > self.max_digits {
            return Err(RuntimeError::ResultTooLarge { digits,
                                                      max: self.max_digits,
                                                      column: span.column() });
        }
        Ok(())
    }

    /// Attaches source context to a failure of the decimal arithmetic.
    ///
    /// A zero divisor is reported at the right operand, naming its rendered
    /// source. Scale overflow is reported at the whole operation.
    fn arithmetic_error(error: ArithmeticError,
                        right_expr: &Expr,
                        span: Span)
                        -> RuntimeError {
        match error {
            ArithmeticError::DivisionByZero => {
                RuntimeError::DivisionByZero { divisor: right_expr.to_string(),
                                               column:  right_expr.span().column(), }
            },
            ArithmeticError::ScaleOverflow => RuntimeError::ScaleOverflow { column: span.column() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(value: &str, start: usize) -> Expr {
        Expr::Num { value: value.to_string(),
                    span:  Span::new(start, start + value.len()), }
    }

    #[test]
    fn subtraction_goes_below_zero() {
        let result = Context::new().eval_binary(BinaryOperator::Sub,
                                                &Decimal::from(3),
                                                &Decimal::new(35, 1),
                                                &num("3.5", 2),
                                                Span::new(0, 5));

        assert_eq!(result.unwrap().to_string(), "-0.5");
    }

    #[test]
    fn zero_divisor_names_the_right_operand() {
        let divisor = Expr::BinaryOp { left:  Box::new(num("1", 5)),
                                       op:    BinaryOperator::Sub,
                                       right: Box::new(num("1", 7)),
                                       span:  Span::new(5, 8), };
        let err = Context::new().eval_binary(BinaryOperator::Div,
                                             &Decimal::from(5),
                                             &Decimal::zero(),
                                             &divisor,
                                             Span::new(0, 9))
                                .unwrap_err();

        assert_eq!(err,
                   RuntimeError::DivisionByZero { divisor: "(1 - 1)".to_string(),
                                                  column:  6, });
    }

    #[test]
    fn oversized_products_are_rejected_before_multiplying() {
        let context = Context::new().with_max_digits(5);
        let multiply = |left: i64, right: i64| {
            context.eval_binary(BinaryOperator::Mul,
                                &Decimal::from(left),
                                &Decimal::from(right),
                                &num(&right.to_string(), 6),
                                Span::new(2, 9))
        };

        assert_eq!(multiply(123, 45).unwrap(), Decimal::from(5535));
        assert_eq!(multiply(999, 999).unwrap_err(),
                   RuntimeError::ResultTooLarge { digits: 8,
                                                  max:    5,
                                                  column: 3, });
    }

    #[test]
    fn division_follows_context_scale() {
        let context = Context::new().with_division_scale(3);
        let result = context.eval_binary(BinaryOperator::Div,
                                         &Decimal::from(2),
                                         &Decimal::from(3),
                                         &num("3", 2),
                                         Span::new(0, 3));

        assert_eq!(result.unwrap().to_string(), "0.667");
    }
}
