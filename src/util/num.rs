use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{ToPrimitive, Zero};

/// Number of fractional digits kept by division unless configured otherwise.
pub const DIVISION_SCALE: i64 = 20;

/// Parses a numeric literal such as `42`, `3.14`, `.5` or `5.`.
///
/// A leading or trailing decimal point is accepted, but at least one digit
/// is required.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use mathfn::util::num::parse_decimal;
///
/// assert_eq!(parse_decimal(".5"), BigDecimal::from_str("0.5").ok());
/// assert_eq!(parse_decimal("5."), BigDecimal::from_str("5").ok());
/// assert_eq!(parse_decimal("."), None);
/// ```
#[must_use]
pub fn parse_decimal(literal: &str) -> Option<BigDecimal> {
    if !literal.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    BigDecimal::from_str(literal).ok()
}

/// Converts a finite `f64` to the decimal with the same shortest round-trip
/// digits, so `0.1` becomes exactly `0.1` rather than its binary expansion.
///
/// Returns `None` for NaN and infinities.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use mathfn::util::num::f64_to_decimal;
///
/// assert_eq!(f64_to_decimal(0.1), BigDecimal::from_str("0.1").ok());
/// assert_eq!(f64_to_decimal(f64::INFINITY), None);
/// ```
#[must_use]
pub fn f64_to_decimal(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&value.to_string()).ok()
}

/// Converts a decimal to the nearest `f64`.
///
/// Returns `None` when the value is outside the finite `f64` range.
#[must_use]
pub fn decimal_to_f64(value: &BigDecimal) -> Option<f64> {
    value.to_f64().filter(|f| f.is_finite())
}

/// Divides `dividend` by `divisor`, keeping exactly `scale` fractional digits
/// and rounding half away from zero.
///
/// The quotient is computed with integer arithmetic, so no digit beyond the
/// last kept one influences the result except through the rounding step.
/// Returns `None` when `divisor` is zero or when the scale difference does not
/// fit a power of ten.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use mathfn::util::num::div_with_scale;
///
/// let q = div_with_scale(&BigDecimal::from(2), &BigDecimal::from(3), 4).unwrap();
/// assert_eq!(q, BigDecimal::from_str("0.6667").unwrap());
///
/// let q = div_with_scale(&BigDecimal::from(-1), &BigDecimal::from(8), 2).unwrap();
/// assert_eq!(q, BigDecimal::from_str("-0.13").unwrap());
///
/// assert!(div_with_scale(&BigDecimal::from(1), &BigDecimal::from(0), 2).is_none());
/// ```
#[must_use]
pub fn div_with_scale(dividend: &BigDecimal, divisor: &BigDecimal, scale: i64) -> Option<BigDecimal> {
    if divisor.is_zero() {
        return None;
    }
    let (a, a_scale) = dividend.as_bigint_and_exponent();
    let (b, b_scale) = divisor.as_bigint_and_exponent();

    // a·10^-as / b·10^-bs = (a / b)·10^(bs - as); the wanted integer is
    // that quotient times 10^scale.
    let shift = scale.checked_add(b_scale)?.checked_sub(a_scale)?;
    let power = pow10(shift.unsigned_abs())?;
    let (numerator, denominator) = if shift >= 0 {
        (a.magnitude() * &power, b.magnitude().clone())
    } else {
        (a.magnitude().clone(), b.magnitude() * &power)
    };

    let mut quotient = &numerator / &denominator;
    let remainder = &numerator % &denominator;
    if remainder * 2u32 >= denominator {
        quotient += 1u32;
    }

    let sign = if (a.sign() == Sign::Minus) == (b.sign() == Sign::Minus) {
        Sign::Plus
    } else {
        Sign::Minus
    };
    Some(BigDecimal::new(BigInt::from_biguint(sign, quotient), scale))
}

fn pow10(exponent: u64) -> Option<BigUint> {
    let exponent = u32::try_from(exponent).ok()?;
    Some(BigUint::from(10u32).pow(exponent))
}
