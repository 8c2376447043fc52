/// Numeric helpers for the decimal arithmetic.
///
/// This module provides powers of ten, digit counting and safe conversions
/// between big integers and the fixed-width integers used for scales and
/// exponents. All conversions return a `Result`, which is `Ok` if the value
/// fits and an error otherwise.
pub mod num;
