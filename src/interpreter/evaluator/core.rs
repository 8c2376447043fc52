use tracing::debug;

use crate::{
    ast::{Expr, Span},
    error::RuntimeError,
    interpreter::value::decimal::Decimal,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default number of significant fractional digits kept by a division that
/// does not terminate.
pub const DIVISION_SCALE: u32 = 20;
/// Default largest accepted exponent magnitude for `**`.
pub const MAX_EXPONENT: u32 = 100_000;
/// Default largest number of digits a product or power may produce.
pub const MAX_DIGITS: u64 = 1_000_000;

/// Stores the evaluation configuration.
///
/// Evaluation itself is stateless; the context only carries the limits that
/// shape division, exponentiation and the size of results. It is immutable
/// while evaluating and can be shared between any number of evaluations.
///
/// ## Usage
///
/// ```
/// use decicalc::interpreter::evaluator::core::{Context, DIVISION_SCALE};
///
/// let context = Context::new();
/// assert_eq!(context.division_scale, DIVISION_SCALE);
///
/// let narrow = Context::new().with_division_scale(4)
///                             .with_max_exponent(10)
///                             .with_max_digits(50);
/// assert_eq!(narrow.division_scale, 4);
/// assert_eq!(narrow.max_exponent, 10);
/// assert_eq!(narrow.max_digits, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Minimum number of significant fractional digits of a non-terminating
    /// quotient.
    pub division_scale: u32,
    /// Largest accepted `|exponent|` for `**`.
    pub max_exponent:   u32,
    /// Largest number of digits a product or power may produce. Checked
    /// against an estimate before the arithmetic runs.
    pub max_digits:     u64,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with the default division scale and limits.
    #[must_use]
    pub const fn new() -> Self {
        Self { division_scale: DIVISION_SCALE,
               max_exponent:   MAX_EXPONENT,
               max_digits:     MAX_DIGITS, }
    }

    /// Returns a copy using `division_scale` fractional digits for division.
    #[must_use]
    pub const fn with_division_scale(mut self, division_scale: u32) -> Self {
        self.division_scale = division_scale;
        self
    }

    /// Returns a copy accepting exponents up to `max_exponent` in magnitude.
    #[must_use]
    pub const fn with_max_exponent(mut self, max_exponent: u32) -> Self {
        self.max_exponent = max_exponent;
        self
    }

    /// Returns a copy rejecting products and powers estimated to exceed
    /// `max_digits` digits.
    #[must_use]
    pub const fn with_max_digits(mut self, max_digits: u64) -> Self {
        self.max_digits = max_digits;
        self
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, unary and binary
    /// operations. Operands are evaluated left before right, and the first
    /// error stops evaluation.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The decimal value of `expr`.
    ///
    /// # Example
    /// ```
    /// use decicalc::{
    ///     ast::{BinaryOperator, Expr, Span},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Num { value: "0.1".to_string(),
    ///                                                         span:  Span::new(0, 3), }),
    ///                             op:    BinaryOperator::Add,
    ///                             right: Box::new(Expr::Num { value: "0.2".to_string(),
    ///                                                         span:  Span::new(4, 7), }),
    ///                             span:  Span::new(0, 7), };
    ///
    /// assert_eq!(Context::new().eval(&expr).unwrap().to_string(), "0.3");
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Decimal> {
        let value = self.eval_expr(expr)?;
        debug!(value = %value, "evaluated expression");
        Ok(value)
    }

    fn eval_expr(&self, expr: &Expr) -> EvalResult<Decimal> {
        match expr {
            Expr::Num { value, span } => Self::eval_literal(value, *span),
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval_expr(expr)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             span, } => {
                let lhs = self.eval_expr(left)?;
                let rhs = self.eval_expr(right)?;
                self.eval_binary(*op, &lhs, &rhs, right, *span)
            },
        }
    }

    /// Reads a literal's text as a decimal.
    ///
    /// The builder has already removed thousands separators, so `value` is
    /// plain digits with an optional fraction.
    ///
    /// # Errors
    /// Returns [`RuntimeError::InvalidLiteral`] if the text is not a number.
    pub fn eval_literal(value: &str, span: Span) -> EvalResult<Decimal> {
        value.parse::<Decimal>()
             .map_err(|_| RuntimeError::InvalidLiteral { literal: value.to_string(),
                                                         column:  span.column(), })
    }
}
