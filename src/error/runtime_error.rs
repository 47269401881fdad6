use bigdecimal::BigDecimal;
use thiserror::Error;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Represents all errors that can occur while evaluating a compiled function.
///
/// These are only ever raised by evaluation; parsing never inspects operand
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Division or remainder with a zero divisor.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Square root of a negative number.
    #[error("Square root of negative number {value}.")]
    NegativeSquareRoot {
        /// The rejected operand.
        value: BigDecimal,
    },
    /// `ln` or `lg` of zero or a negative number.
    #[error("Logarithm of non-positive number {value} in '{operator}'.")]
    NonPositiveLogarithm {
        /// Either `ln` or `lg`.
        operator: String,
        /// The rejected operand.
        value:    BigDecimal,
    },
    /// A negative base raised to a fractional exponent has no real result.
    #[error("Negative base with fractional exponent is not real: {base} ^ {exponent}.")]
    InvalidExponent {
        /// The negative base.
        base:     BigDecimal,
        /// The fractional exponent.
        exponent: BigDecimal,
    },
    /// The input slice is too short for a referenced variable.
    #[error("Not enough values provided for variable '{name}': index {index}, but only {provided} given.")]
    MissingOperand {
        /// The variable name.
        name:     String,
        /// The index the variable was bound to.
        index:    usize,
        /// Length of the input slice.
        provided: usize,
    },
    /// A floating-point step produced infinity or NaN, or an operand was out
    /// of floating-point range.
    #[error("Result of '{operator}' is not a finite number.")]
    NonFiniteResult {
        /// The operator whose computation failed.
        operator: String,
    },
    /// An operator that is recognised but has no numeric semantics.
    #[error("Operator '{operator}' is not supported.")]
    UnsupportedOperation {
        /// The operator symbol.
        operator: String,
    },
}
