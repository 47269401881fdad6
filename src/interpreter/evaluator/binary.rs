use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::{
    ast::BinaryOperator,
    error::{EvalResult, RuntimeError},
    interpreter::evaluator::core::MathFunction,
    util::num::{decimal_to_f64, div_with_scale, f64_to_decimal},
};

impl MathFunction {
    /// Evaluates a binary operation on two values.
    ///
    /// `+`, `-` and `*` are exact. `/` keeps the configured number of
    /// fractional digits, rounding half away from zero. `%` is the remainder
    /// of truncating division and takes the sign of the dividend. `^` is
    /// computed in `f64`.
    ///
    /// # Parameters
    /// - `op`: Binary operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed value wrapped in `EvalResult`.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` or `%` with a zero right operand.
    /// - `InvalidExponent` for a negative base with a fractional exponent.
    /// - `NonFiniteResult` if `^` overflows `f64` or an operand is out of its
    ///   range.
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: &BigDecimal,
                       right: &BigDecimal)
                       -> EvalResult<BigDecimal> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right.is_zero() {
                    return Err(RuntimeError::DivisionByZero);
                }
                div_with_scale(left, right, self.options().division_scale).ok_or_else(|| {
                    RuntimeError::NonFiniteResult { operator: op.symbol().to_string() }
                })
            },
            BinaryOperator::Rem => {
                if right.is_zero() {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(left % right)
            },
            BinaryOperator::Pow => Self::eval_pow(left, right),
        }
    }

    /// Evaluates an exponentiation in `f64`.
    ///
    /// A negative base is only allowed with an integral exponent, since any
    /// other combination has no real result.
    ///
    /// # Example
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use mathfn::{error::RuntimeError, interpreter::evaluator::core::MathFunction};
    ///
    /// let v = MathFunction::eval_pow(&BigDecimal::from(-2), &BigDecimal::from(3)).unwrap();
    /// assert_eq!(v, BigDecimal::from(-8));
    ///
    /// let half = "0.5".parse::<BigDecimal>().unwrap();
    /// let err = MathFunction::eval_pow(&BigDecimal::from(-4), &half);
    /// assert!(matches!(err, Err(RuntimeError::InvalidExponent { .. })));
    /// ```
    pub fn eval_pow(base: &BigDecimal, exponent: &BigDecimal) -> EvalResult<BigDecimal> {
        let non_finite = || RuntimeError::NonFiniteResult { operator: BinaryOperator::Pow.symbol()
                                                                                         .to_string() };
        let b = decimal_to_f64(base).ok_or_else(non_finite)?;
        let e = decimal_to_f64(exponent).ok_or_else(non_finite)?;

        if b < 0.0 && e.fract() != 0.0 {
            return Err(RuntimeError::InvalidExponent { base:     base.clone(),
                                                       exponent: exponent.clone(), });
        }

        f64_to_decimal(b.powf(e)).ok_or_else(non_finite)
    }
}
