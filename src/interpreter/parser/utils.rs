use std::f64::consts;

use bigdecimal::BigDecimal;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{ParseError, ParseResult},
    util::num::{f64_to_decimal, parse_decimal},
};

/// Builds the literal node for a number token.
///
/// # Errors
/// `InvalidNumber` if the text is not a decimal literal.
pub(in crate::interpreter::parser) fn number_literal(text: &str) -> ParseResult<Expr> {
    parse_decimal(text).map(Expr::number)
                       .ok_or_else(|| ParseError::InvalidNumber { literal: text.to_string() })
}

/// Returns the value of a named constant.
///
/// Constants are materialised from the `f64` value, so `pi` is
/// `3.141592653589793` and not a symbolic or higher-precision value.
///
/// ## Example
/// ```
/// use mathfn::interpreter::parser::utils::constant_value;
///
/// assert_eq!(constant_value("pi").unwrap().to_string(), "3.141592653589793");
/// assert_eq!(constant_value("e").unwrap().to_string(), "2.718281828459045");
/// assert!(constant_value("tau").is_err());
/// ```
pub fn constant_value(name: &str) -> ParseResult<BigDecimal> {
    let value = match name {
        "e" => consts::E,
        "pi" => consts::PI,
        _ => return Err(ParseError::UnknownConstant { name: name.to_string() }),
    };
    f64_to_decimal(value).ok_or_else(|| ParseError::UnknownConstant { name: name.to_string() })
}

/// Resolves the text of a unary operator token.
///
/// # Errors
/// `UnknownOperator` if the text names no unary operator.
pub(in crate::interpreter::parser) fn unary_operator(text: &str) -> ParseResult<UnaryOperator> {
    UnaryOperator::from_symbol(text).ok_or_else(|| ParseError::UnknownOperator { operator:
                                                                                      text.to_string() })
}

/// Resolves the text of a binary operator token.
///
/// # Errors
/// `UnknownOperator` if the text names no binary operator.
pub(in crate::interpreter::parser) fn binary_operator(text: &str) -> ParseResult<BinaryOperator> {
    BinaryOperator::from_symbol(text).ok_or_else(|| ParseError::UnknownOperator { operator:
                                                                                       text.to_string() })
}
