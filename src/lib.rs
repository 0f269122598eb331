//! # calculable
//!
//! calculable evaluates flat infix arithmetic expressions such as `2+3.5*4`.
//! Expressions are validated in a single left-to-right scan and then folded
//! strictly left to right, without operator precedence: `2+3*4` is `20`.
//!
//! On top of the engine sits a small calculation service that stores each
//! expression together with its rendered result.

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
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::CalcError,
    interpreter::{evaluator::evaluate, parser::parse_expression},
};

/// Defines the intermediate form of an expression.
///
/// This module declares the [`TokenStream`](ast::TokenStream) handed from the
/// parser to the evaluator, and the closed set of binary
/// [`Operator`](ast::Operator)s with their operations.
pub mod ast;
/// The capability the engine requires of its caller.
pub mod calculable;
/// Provides the error types for validation, evaluation and the service.
///
/// Every failure is a variant of a closed enum, so callers can tell a
/// malformed expression from an evaluation failure and match on the exact
/// kind.
pub mod error;
/// Tokenizes, validates and evaluates expressions.
///
/// # Responsibilities
/// - Classifies characters of the input.
/// - Validates the expression and builds its token stream.
/// - Folds the token stream into one value.
pub mod interpreter;
/// Stores calculations and keeps their results in sync with their
/// expressions.
pub mod service;
/// Numeric helpers shared by the service and the command line.
pub mod util;

pub use calculable::Calculable;

/// Evaluates the expression held by `calc` and writes the result back.
///
/// The expression is validated and folded; only on success is
/// [`Calculable::set_result`] called. Any failure is returned with its kind
/// intact and leaves `calc` untouched.
///
/// # Errors
/// Returns [`CalcError::Parse`] for malformed expressions and
/// [`CalcError::Runtime`] if the evaluator rejects the token stream.
pub fn calculate_expression<C: Calculable + ?Sized>(calc: &mut C) -> Result<(), CalcError> {
    let result = evaluate_str(calc.expression())?;
    calc.set_result(result);
    Ok(())
}

/// Evaluates an expression string directly.
///
/// # Errors
/// Same as [`calculate_expression`].
///
/// # Examples
/// ```
/// use calculable::{
///     error::{CalcError, ParseError},
///     evaluate_str,
/// };
///
/// assert_eq!(evaluate_str("2+3*4").unwrap(), 20.0);
/// assert_eq!(evaluate_str("2+3+"), Err(CalcError::Parse(ParseError::EndsWithOperator)));
/// ```
pub fn evaluate_str(expression: &str) -> Result<f64, CalcError> {
    let stream = parse_expression(expression)?;
    let result = evaluate(&stream)?;
    debug!("{expression:?} = {result}");
    Ok(result)
}
