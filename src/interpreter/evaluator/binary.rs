/// Dispatch for binary operators and the exact arithmetic operators.
pub mod core;

/// Exponentiation with integer exponents.
pub mod power;
