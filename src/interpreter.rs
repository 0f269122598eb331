/// The evaluator module folds a validated token stream into one number.
///
/// # Responsibilities
/// - Maps each operator symbol onto its binary operation.
/// - Applies the operations strictly left to right, without precedence.
/// - Re-validates the stream it is given instead of trusting it blindly.
pub mod evaluator;
/// The lexer module classifies the characters of an expression.
///
/// The lexer reads the raw text and yields digit runs, dots and operator
/// symbols, skipping whitespace. Anything else is reported as a lexer error
/// at its byte offset.
pub mod lexer;
/// The parser module validates an expression and builds its token stream.
///
/// # Responsibilities
/// - Checks that the expression starts and ends with an operand.
/// - Accumulates operand text and closes it at each operator.
/// - Reports the first illegal character-class transition with a specific
///   error kind.
pub mod parser;
