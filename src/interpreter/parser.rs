/// Core parsing logic.
///
/// Contains the shunting-yard parser that turns a token sequence into an
/// expression tree or directly into a compiled function.
pub mod core;

/// Variable index assignment.
///
/// Tracks the variables seen during one parse and hands out their positions
/// in the input slice of the compiled function.
pub mod registry;

/// Utility functions for the parser.
///
/// Converts individual tokens into literals, constants and operators.
pub mod utils;
