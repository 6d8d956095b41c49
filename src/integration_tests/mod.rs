//! Tests that check the calculators against each other and against spectroscopic reference values.
pub mod spectrum;
