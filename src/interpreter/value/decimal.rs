use std::{cmp::Ordering, fmt, ops, str::FromStr};

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::util::num::{i64_to_u32_checked, magnitude, pow10};

/// Failures of the decimal arithmetic itself, without source context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The divisor (or a zero base under a negative exponent) was zero.
    DivisionByZero,
    /// The result would need more than `u32::MAX` fractional digits.
    ScaleOverflow,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ScaleOverflow => write!(f, "scale overflow"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Returned when text is not a plain decimal number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDecimalError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a decimal number", self.input)
    }
}

impl std::error::Error for ParseDecimalError {}

/// An exact decimal number: `significand × 10^-scale`.
///
/// The representation is not normalized, so `1.50` (significand 150, scale 2)
/// and `1.5` (15, 1) are distinct representations of equal values. Equality
/// and ordering compare values; [`Decimal::normalized`] and the `Display`
/// impl strip trailing fractional zeros.
#[derive(Debug, Clone)]
pub struct Decimal {
    significand: BigInt,
    scale:       u32,
}

impl Decimal {
    /// Creates `significand × 10^-scale`.
    ///
    /// # Example
    /// ```
    /// use decicalc::interpreter::value::decimal::Decimal;
    ///
    /// let d = Decimal::new(12_345, 2);
    /// assert_eq!(d.to_string(), "123.45");
    /// ```
    pub fn new(significand: impl Into<BigInt>, scale: u32) -> Self {
        Self { significand: significand.into(),
               scale }
    }

    /// The value `0`.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    /// The value `1`.
    #[must_use]
    pub fn one() -> Self {
        Self::new(BigInt::one(), 0)
    }

    /// The unscaled integer.
    #[must_use]
    pub const fn significand(&self) -> &BigInt {
        &self.significand
    }

    /// The number of digits after the decimal point in this representation.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns `true` if the value is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.significand.is_zero()
    }

    /// Returns `true` if the value is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.significand.is_negative()
    }

    /// Returns the same value with trailing fractional zeros removed.
    ///
    /// # Example
    /// ```
    /// use decicalc::interpreter::value::decimal::Decimal;
    /// use num_bigint::BigInt;
    ///
    /// let d = Decimal::new(123_400, 3).normalized();
    /// assert_eq!(d.significand(), &BigInt::from(1234));
    /// assert_eq!(d.scale(), 1);
    /// ```
    #[must_use]
    pub fn normalized(&self) -> Self {
        if self.significand.is_zero() {
            return Self::zero();
        }

        let digits = self.significand.magnitude().to_str_radix(10);
        let zeros = digits.bytes().rev().take_while(|&b| b == b'0').count();
        let strip = u32::try_from(zeros).map_or(self.scale, |zeros| zeros.min(self.scale));

        Self { significand: &self.significand / pow10(strip),
               scale:       self.scale - strip, }
    }

    /// Returns the value as an integer if it has no fractional part.
    ///
    /// # Example
    /// ```
    /// use decicalc::interpreter::value::decimal::Decimal;
    /// use num_bigint::BigInt;
    ///
    /// assert_eq!(Decimal::new(300, 2).to_integer(), Some(BigInt::from(3)));
    /// assert_eq!(Decimal::new(350, 2).to_integer(), None);
    /// ```
    #[must_use]
    pub fn to_integer(&self) -> Option<BigInt> {
        let normalized = self.normalized();
        (normalized.scale == 0).then_some(normalized.significand)
    }

    /// The significand rescaled to `scale` fractional digits.
    ///
    /// `scale` must not be smaller than `self.scale`.
    fn rescaled(&self, scale: u32) -> BigInt {
        &self.significand * pow10(scale - self.scale)
    }

    /// Both significands brought to the larger of the two scales.
    fn aligned(&self, other: &Self) -> (BigInt, BigInt, u32) {
        let scale = self.scale.max(other.scale);
        (self.rescaled(scale), other.rescaled(scale), scale)
    }

    /// Exact multiplication.
    ///
    /// # Errors
    /// Returns [`ArithmeticError::ScaleOverflow`] if the combined scale does
    /// not fit in a `u32`.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        let scale = self.scale
                        .checked_add(rhs.scale)
                        .ok_or(ArithmeticError::ScaleOverflow)?;
        Ok(Self { significand: &self.significand * &rhs.significand,
                  scale })
    }

    /// Division with at least `precision` significant fractional digits.
    ///
    /// The quotient gets `precision` fractional digits, plus one more for
    /// every leading fractional zero it has, so `1e-30 / 3` still keeps
    /// `precision` significant digits. The last digit is rounded half away
    /// from zero. A quotient that terminates within that many digits is
    /// exact.
    ///
    /// # Errors
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero and
    /// [`ArithmeticError::ScaleOverflow`] if the required scale does not fit.
    ///
    /// # Example
    /// ```
    /// use decicalc::interpreter::value::decimal::Decimal;
    ///
    /// let third = Decimal::one().checked_div(&Decimal::new(3, 0), 5).unwrap();
    /// assert_eq!(third.to_string(), "0.33333");
    ///
    /// let quarter = Decimal::one().checked_div(&Decimal::new(4, 0), 5).unwrap();
    /// assert_eq!(quarter.to_string(), "0.25");
    /// ```
    pub fn checked_div(&self, rhs: &Self, precision: u32) -> Result<Self, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let shift = magnitude(&self.significand, self.scale)
                    - magnitude(&rhs.significand, rhs.scale);
        let scale = i64::from(precision) + (-shift).max(0);
        let scale = i64_to_u32_checked(scale, ArithmeticError::ScaleOverflow)?;

        // q = (a / 10^sa) / (b / 10^sb) * 10^scale = a * 10^(scale + sb - sa) / b
        let exponent = i64::from(scale) + i64::from(rhs.scale) - i64::from(self.scale);
        let (numerator, denominator) = if exponent >= 0 {
            let exponent = i64_to_u32_checked(exponent, ArithmeticError::ScaleOverflow)?;
            (&self.significand * pow10(exponent), rhs.significand.clone())
        } else {
            let exponent = i64_to_u32_checked(-exponent, ArithmeticError::ScaleOverflow)?;
            (self.significand.clone(), &rhs.significand * pow10(exponent))
        };

        let mut quotient = &numerator / &denominator;
        let remainder = &numerator % &denominator;
        if remainder.abs() * 2u32 >= denominator.abs() {
            if numerator.is_negative() == denominator.is_negative() {
                quotient += 1u32;
            } else {
                quotient -= 1u32;
            }
        }

        Ok(Self { significand: quotient,
                  scale })
    }

    /// Raises `self` to an integer power.
    ///
    /// Non-negative exponents are exact. A negative exponent computes
    /// `1 / self^|exponent|` with [`Decimal::checked_div`] and `precision`.
    /// `0^0` is `1`.
    ///
    /// # Errors
    /// Returns [`ArithmeticError::DivisionByZero`] for a zero base with a
    /// negative exponent and [`ArithmeticError::ScaleOverflow`] if the scale
    /// of the result does not fit.
    ///
    /// # Example
    /// ```
    /// use decicalc::interpreter::value::decimal::Decimal;
    ///
    /// let base = Decimal::new(15, 1); // 1.5
    /// assert_eq!(base.checked_powi(3, 20).unwrap().to_string(), "3.375");
    /// assert_eq!(Decimal::new(2, 0).checked_powi(-2, 20).unwrap().to_string(), "0.25");
    /// ```
    pub fn checked_powi(&self, exponent: i64, precision: u32) -> Result<Self, ArithmeticError> {
        let base = self.normalized();
        let power = u32::try_from(exponent.unsigned_abs()).map_err(|_| {
                                                                  ArithmeticError::ScaleOverflow
                                                              })?;
        let scale = base.scale
                        .checked_mul(power)
                        .ok_or(ArithmeticError::ScaleOverflow)?;
        let positive = Self { significand: base.significand.pow(power),
                              scale };

        if exponent < 0 {
            Self::one().checked_div(&positive, precision)
        } else {
            Ok(positive)
        }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b, _) = self.aligned(other);
        a.cmp(&b)
    }
}

impl ops::Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: Self) -> Decimal {
        let (a, b, scale) = self.aligned(rhs);
        Decimal { significand: a + b,
                  scale }
    }
}

impl ops::Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Decimal {
        let (a, b, scale) = self.aligned(rhs);
        Decimal { significand: a - b,
                  scale }
    }
}

impl ops::Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self {
        Self { significand: -self.significand,
               scale:       self.scale, }
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

/// Parses plain decimal text: an optional `-`, digits, and an optional `.`
/// followed by at least one digit. At least one digit is required overall,
/// so `.5` is accepted and `5.`, `.` and `""` are not.
///
/// The scale is the number of digits written after the point, so `"1.50"`
/// has scale 2.
impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseDecimalError { input: s.to_string() };

        let (negative, unsigned) = s.strip_prefix('-').map_or((false, s), |rest| (true, rest));
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) if !fraction.is_empty() => (whole, fraction),
            Some(_) => return Err(invalid()),
            None => (unsigned, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.len() + fraction.len() == 0 || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let digits = format!("{whole}{fraction}");
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let scale = u32::try_from(fraction.len()).map_err(|_| invalid())?;

        Ok(Self { significand: if negative { -magnitude } else { magnitude },
                  scale })
    }
}

/// Fixed-point rendering with trailing fractional zeros stripped:
/// `1234.5`, `-0.001`, `12`. Never uses scientific notation.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let normalized = self.normalized();
        let sign = if normalized.is_negative() { "-" } else { "" };
        let digits = normalized.significand.magnitude().to_str_radix(10);
        let scale = normalized.scale as usize;

        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        if digits.len() <= scale {
            let zeros = "0".repeat(scale - digits.len());
            return write!(f, "{sign}0.{zeros}{digits}");
        }
        let (whole, fraction) = digits.split_at(digits.len() - scale);
        write!(f, "{sign}{whole}.{fraction}")
    }
}
