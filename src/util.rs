/// Numeric formatting helpers.
///
/// This module renders evaluation results as text. Results use the shortest
/// decimal representation that parses back to the same `f64`, never an
/// exponent, and never padding zeros.
pub mod num;
