//! # mathfn
//!
//! mathfn compiles arithmetic expressions into reusable functions over
//! arbitrary-precision decimals. An expression such as `sqrt(x^2 + y^2)` is
//! tokenized, parsed with operator precedence, and lowered into a
//! [`MathFunction`] that can be evaluated many times with different variable
//! values.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use bigdecimal::BigDecimal;

use crate::interpreter::{lexer::tokenize, parser::core::parse};
pub use crate::{error::Error, interpreter::evaluator::core::MathFunction};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// an expression as a tree. The tree is built by the parser and lowered by
/// the evaluator.
///
/// # Responsibilities
/// - Defines the four node kinds: numbers, variables, unary and binary
///   operations.
/// - Defines operator symbols, precedence and associativity.
/// - Renders trees back to infix text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or evaluating an expression, including the position or operand
/// that caused them.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, parser, evaluator).
/// - Attaches offsets and offending values for precise diagnostics.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the compilation pipeline.
///
/// This module ties together lexing, parsing, lowering and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, the parser and the evaluator.
/// - Provides the stage-by-stage entry points.
pub mod interpreter;
/// General utilities for decimal arithmetic and conversion.
///
/// # Responsibilities
/// - Convert between decimals and `f64` without silent overflow.
/// - Divide decimals at a fixed scale.
/// - Parse numeric literals.
pub mod util;

/// Compiles an expression into a reusable function.
///
/// Runs the tokenizer and the parser and lowers the result. No arithmetic is
/// performed yet, so errors such as division by zero only surface when the
/// function is evaluated.
///
/// # Errors
/// Returns `Error::Parse` if the expression cannot be tokenized or parsed.
///
/// # Examples
/// ```
/// use bigdecimal::BigDecimal;
///
/// let hypot = mathfn::compile("sqrt(x^2 + y^2)").unwrap();
/// assert_eq!(hypot.evaluate(&[BigDecimal::from(3), BigDecimal::from(4)]).unwrap(),
///            BigDecimal::from(5));
///
/// // Compiles fine, fails only when evaluated.
/// assert!(mathfn::compile("1/0").is_ok());
/// assert!(mathfn::compile("(1").is_err());
/// ```
pub fn compile(expression: &str) -> Result<MathFunction, Error> {
    let tokens = tokenize(expression)?;
    Ok(parse(&tokens)?)
}

/// Compiles and evaluates an expression once.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use bigdecimal::BigDecimal;
///
/// let result = mathfn::evaluate("2^3^2", &[]).unwrap();
/// assert_eq!(result, BigDecimal::from(512));
///
/// assert!(mathfn::evaluate("1/0", &[]).is_err());
/// ```
pub fn evaluate(expression: &str, inputs: &[BigDecimal]) -> Result<BigDecimal, Error> {
    Ok(compile(expression)?.evaluate(inputs)?)
}
