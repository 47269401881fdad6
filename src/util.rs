/// Numeric conversion helpers.
///
/// This module provides the conversions between arbitrary-precision decimals
/// and `f64` used by the transcendental operators, the fixed-scale division
/// used by `/`, and the parsing of numeric literals.
///
/// Conversions that can fail return an `Option`; callers decide which error
/// to report.
pub mod num;
