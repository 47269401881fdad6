/// Lowering and the compiled function.
///
/// Turns an expression tree into a [`MathFunction`](core::MathFunction) and
/// walks that tree whenever the function is evaluated.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements `+ - * / % ^` on decimals, including the checks for division by
/// zero and for negative bases with fractional exponents.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation, the trigonometric and logarithmic functions, square
/// roots and absolute values.
pub mod unary;
