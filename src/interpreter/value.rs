/// Arbitrary-precision decimal numbers.
///
/// Defines the `Decimal` type every expression evaluates to: a big integer
/// significand with a base-10 scale. Addition, subtraction and multiplication
/// are exact; division and negative powers round to a requested number of
/// fractional digits.
pub mod decimal;
