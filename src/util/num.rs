use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Returns `10^exponent` as a big integer.
///
/// ## Example
/// ```
/// use decicalc::util::num::pow10;
/// use num_bigint::BigInt;
///
/// assert_eq!(pow10(0), BigInt::from(1));
/// assert_eq!(pow10(3), BigInt::from(1000));
/// ```
#[must_use]
pub fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u32).pow(exponent)
}

/// Counts the decimal digits of `|value|`. Zero has one digit.
///
/// ## Example
/// ```
/// use decicalc::util::num::digit_count;
/// use num_bigint::BigInt;
///
/// assert_eq!(digit_count(&BigInt::from(0)), 1);
/// assert_eq!(digit_count(&BigInt::from(-12_345)), 5);
/// ```
#[must_use]
pub fn digit_count(value: &BigInt) -> usize {
    value.magnitude().to_str_radix(10).len()
}

/// An upper bound on the decimal digits of `|value|`, read from its bit
/// length without converting to decimal.
///
/// ## Example
/// ```
/// use decicalc::util::num::digit_bound;
/// use num_bigint::BigInt;
///
/// assert_eq!(digit_bound(&BigInt::from(0)), 1);
/// assert_eq!(digit_bound(&BigInt::from(999)), 4);
/// assert!(digit_bound(&BigInt::from(10).pow(500)) >= 501);
/// ```
#[must_use]
pub fn digit_bound(value: &BigInt) -> u64 {
    // 30_103 / 100_000 is just above log10(2).
    value.bits() * 30_103 / 100_000 + 1
}

/// Safely converts an `i64` to `u32`, failing for negative or oversized
/// values.
///
/// ## Errors
/// Returns `Err(error)` if `value` is outside `0..=u32::MAX`.
///
/// ## Example
/// ```
/// use decicalc::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(42, "out of range"), Ok(42));
/// assert!(i64_to_u32_checked(-1, "out of range").is_err());
/// assert!(i64_to_u32_checked(i64::from(u32::MAX) + 1, "out of range").is_err());
/// ```
pub fn i64_to_u32_checked<E>(value: i64, error: E) -> Result<u32, E> {
    u32::try_from(value).map_err(|_| error)
}

/// Safely converts a big integer to `i64`.
///
/// ## Errors
/// Returns `Err(error)` if `value` does not fit.
///
/// ## Example
/// ```
/// use decicalc::util::num::bigint_to_i64_checked;
/// use num_bigint::BigInt;
///
/// assert_eq!(bigint_to_i64_checked(&BigInt::from(-7), ()), Ok(-7));
/// assert!(bigint_to_i64_checked(&(BigInt::from(i64::MAX) + 1), ()).is_err());
/// ```
pub fn bigint_to_i64_checked<E>(value: &BigInt, error: E) -> Result<i64, E> {
    value.to_i64().ok_or(error)
}

/// The order of magnitude of `significand × 10^-scale`: the number of digits
/// before the decimal point, negative when there are leading fractional
/// zeros.
///
/// ## Example
/// ```
/// use decicalc::util::num::magnitude;
/// use num_bigint::BigInt;
///
/// assert_eq!(magnitude(&BigInt::from(12_345), 2), 3); // 123.45
/// assert_eq!(magnitude(&BigInt::from(5), 3), -2); // 0.005
/// ```
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn magnitude(significand: &BigInt, scale: u32) -> i64 {
    digit_count(significand) as i64 - i64::from(scale)
}
