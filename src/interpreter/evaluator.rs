/// Binary operator evaluation logic.
///
/// Handles addition, subtraction, multiplication, division and
/// exponentiation of decimal values.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation entry point, the evaluation configuration and
/// error propagation.
pub mod core;
