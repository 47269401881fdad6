/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// expression. Parse errors include unknown characters, malformed literals,
/// mismatched parentheses and operators that are missing operands.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a compiled function is
/// evaluated, such as division by zero or the logarithm of a non-positive
/// number.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseResult};
pub use runtime_error::{EvalResult, RuntimeError};
use thiserror::Error;

/// Any failure produced by the compile-and-evaluate pipeline.
///
/// Returned by the convenience entry points [`crate::compile`] and
/// [`crate::evaluate`], which span more than one stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The expression could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The compiled function failed while being evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
