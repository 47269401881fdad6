use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::{
    ast::UnaryOperator,
    error::{EvalResult, RuntimeError},
    interpreter::evaluator::core::MathFunction,
    util::num::{decimal_to_f64, f64_to_decimal},
};

impl MathFunction {
    /// Evaluates a unary operation on a value.
    ///
    /// Negation and `abs` are exact. Every other operator converts the value
    /// to `f64`, applies the floating-point function and converts back, so
    /// their results carry `f64` precision only.
    ///
    /// Domain checks happen on the decimal value before conversion:
    /// `sqrt` rejects negatives, `ln` and `lg` reject zero and negatives.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The computed value wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use mathfn::{
    ///     ast::UnaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::evaluator::core::MathFunction,
    /// };
    ///
    /// let v = MathFunction::eval_unary(UnaryOperator::Abs, &BigDecimal::from(-3)).unwrap();
    /// assert_eq!(v, BigDecimal::from(3));
    ///
    /// let v = MathFunction::eval_unary(UnaryOperator::Lg, &BigDecimal::from(100)).unwrap();
    /// assert_eq!(v, BigDecimal::from(2));
    ///
    /// let err = MathFunction::eval_unary(UnaryOperator::Sqrt, &BigDecimal::from(-1));
    /// assert!(matches!(err, Err(RuntimeError::NegativeSquareRoot { .. })));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &BigDecimal) -> EvalResult<BigDecimal> {
        match op {
            UnaryOperator::Negate => Ok(-value),
            UnaryOperator::Abs => Ok(value.abs()),
            UnaryOperator::Sin => float_op(op, value, f64::sin),
            UnaryOperator::Cos => float_op(op, value, f64::cos),
            UnaryOperator::Tan => float_op(op, value, f64::tan),
            UnaryOperator::Atan | UnaryOperator::Catan => float_op(op, value, f64::atan),
            UnaryOperator::Acatan => {
                Err(RuntimeError::UnsupportedOperation { operator: op.symbol().to_string() })
            },
            UnaryOperator::Sqrt => {
                if *value < BigDecimal::zero() {
                    return Err(RuntimeError::NegativeSquareRoot { value: value.clone() });
                }
                float_op(op, value, f64::sqrt)
            },
            UnaryOperator::Ln | UnaryOperator::Lg => {
                if *value <= BigDecimal::zero() {
                    return Err(RuntimeError::NonPositiveLogarithm { operator: op.symbol().to_string(),
                                                                    value:    value.clone(), });
                }
                let log: fn(f64) -> f64 = if op == UnaryOperator::Ln { f64::ln } else { f64::log10 };
                float_op(op, value, log)
            },
        }
    }
}

/// Applies `f` through `f64`, rejecting operands and results that are not
/// finite floats.
fn float_op(op: UnaryOperator, value: &BigDecimal, f: fn(f64) -> f64) -> EvalResult<BigDecimal> {
    let non_finite = || RuntimeError::NonFiniteResult { operator: op.symbol().to_string() };
    let x = decimal_to_f64(value).ok_or_else(non_finite)?;
    f64_to_decimal(f(x)).ok_or_else(non_finite)
}
