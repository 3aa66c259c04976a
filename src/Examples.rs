//! examples of usage of RustedPolyCalc
/// Polynomial parsing and algebra examples
pub mod polynomial_examples;
