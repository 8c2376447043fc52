use crate::{
    ast::{Expr, Span},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::decimal::{ArithmeticError, Decimal},
    },
    util::num::{bigint_to_i64_checked, digit_bound},
};

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// The exponent must be an integer; `2 ** 3.0` is accepted, `2 ** 0.5` is
    /// not. Non-negative exponents are exact and negative exponents compute
    /// `1 / base ** |exponent|` with the context's division scale. `0 ** 0`
    /// is `1`.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `exponent_expr`: The exponent node, used for error positions.
    /// - `span`: Source span of the whole operation.
    ///
    /// # Returns
    /// An `EvalResult<Decimal>` containing the result of `base ** exponent`.
    ///
    /// # Errors
    /// - [`RuntimeError::UnsupportedExponent`] for a fractional exponent.
    /// - [`RuntimeError::ExponentTooLarge`] if `|exponent|` is above
    ///   [`Context::max_exponent`].
    /// - [`RuntimeError::ResultTooLarge`] if `base ** |exponent|` is estimated
    ///   at more than [`Context::max_digits`] digits.
    /// - [`RuntimeError::DivisionByZero`] for a zero base with a negative
    ///   exponent, reported at the base.
    ///
    /// # Example
    /// ```
    /// use decicalc::{
    ///     ast::{Expr, Span},
    ///     interpreter::{evaluator::core::Context, value::decimal::Decimal},
    /// };
    ///
    /// let exponent = Expr::Num { value: "10".to_string(),
    ///                            span:  Span::new(3, 5), };
    ///
    /// let result = Context::new().eval_pow(&Decimal::from(2),
    ///                                      &Decimal::from(10),
    ///                                      &exponent,
    ///                                      Span::new(0, 5));
    /// assert_eq!(result.unwrap(), Decimal::from(1024));
    /// ```
    pub fn eval_pow(&self,
                    base: &Decimal,
                    exponent: &Decimal,
                    exponent_expr: &Expr,
                    span: Span)
                    -> EvalResult<Decimal> {
        let column = exponent_expr.span().column();

        let Some(integer) = exponent.to_integer() else {
            return Err(RuntimeError::UnsupportedExponent { exponent: exponent.to_string(),
                                                           column });
        };
        let too_large = || RuntimeError::ExponentTooLarge { exponent: exponent.to_string(),
                                                            max: self.max_exponent,
                                                            column };
        let power = bigint_to_i64_checked(&integer, too_large())?;
        if power.unsigned_abs() > u64::from(self.max_exponent) {
            return Err(too_large());
        }
        let digits = digit_bound(base.significand()).saturating_mul(power.unsigned_abs());
        self.check_result_size(digits, span)?;

        base.checked_powi(power, self.division_scale)
            .map_err(|e| match e {
                ArithmeticError::DivisionByZero => {
                    RuntimeError::DivisionByZero { divisor: base.to_string(),
                                                   column:  span.column(), }
                },
                ArithmeticError::ScaleOverflow => RuntimeError::ScaleOverflow { column: span.column() },
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exponent(value: &str) -> Expr {
        Expr::Num { value: value.to_string(),
                    span:  Span::new(3, 3 + value.len()), }
    }

    fn pow(context: &Context, base: &str, power: &str) -> EvalResult<Decimal> {
        context.eval_pow(&base.parse::<Decimal>().unwrap(),
                         &power.parse::<Decimal>().unwrap(),
                         &exponent(power),
                         Span::new(0, 3 + power.len()))
    }

    #[test]
    fn integral_decimal_exponent_is_accepted() {
        assert_eq!(pow(&Context::new(), "3", "2.0").unwrap(), Decimal::from(9));
    }

    #[test]
    fn fractional_exponent_is_rejected() {
        let err = pow(&Context::new(), "2", "0.5").unwrap_err();

        assert_eq!(err,
                   RuntimeError::UnsupportedExponent { exponent: "0.5".to_string(),
                                                       column:   4, });
    }

    #[test]
    fn exponent_limit_applies_to_both_signs() {
        let context = Context::new().with_max_exponent(5);

        assert!(pow(&context, "2", "5").is_ok());
        assert!(matches!(pow(&context, "2", "-6"),
                         Err(RuntimeError::ExponentTooLarge { max: 5, .. })));
    }

    #[test]
    fn huge_exponent_is_too_large() {
        let err = pow(&Context::new(), "1", "100000000000000000000000").unwrap_err();

        assert!(matches!(err, RuntimeError::ExponentTooLarge { max: 100_000, .. }));
    }

    #[test]
    fn result_size_is_checked_before_raising() {
        let context = Context::new().with_max_digits(10);

        assert_eq!(pow(&context, "2", "9").unwrap(), Decimal::from(512));
        assert_eq!(pow(&context, "2", "-11").unwrap_err(),
                   RuntimeError::ResultTooLarge { digits: 11,
                                                  max:    10,
                                                  column: 1, });
    }

    #[test]
    fn zero_to_negative_power_divides_by_zero() {
        let err = pow(&Context::new(), "0", "-1").unwrap_err();

        assert_eq!(err,
                   RuntimeError::DivisionByZero { divisor: "0".to_string(),
                                                  column:  1, });
    }

    #[test]
    fn zero_to_the_zero_is_one() {
        assert_eq!(pow(&Context::new(), "0", "0").unwrap(), Decimal::one());
    }
}
