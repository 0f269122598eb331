/// Syntax errors.
///
/// Defines every way the tokenizer/validator can reject an expression: a
/// missing leading or trailing operand, adjacent dots, adjacent operators,
/// characters outside the accepted alphabet and operand text that does not
/// parse as a number.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors the evaluator raises while folding a token stream.
/// They are unreachable for streams produced by the validator and exist to
/// guard the evaluator against hand-built input.
pub mod runtime_error;
/// Errors returned by the evaluation entry points.
pub mod calc_error;
/// Errors returned by the calculation service.
pub mod service_error;

pub use calc_error::CalcError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use service_error::ServiceError;
