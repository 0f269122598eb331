use log::{debug, trace};

use crate::{
    ast::{Operator, TokenStream},
    error::RuntimeError,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Folds a token stream into a single value, strictly left to right.
///
/// The accumulator starts at the first operand; each operator is then applied
/// to the accumulator and the operand that follows it. No precedence is
/// involved, so `2 + 3 * 4` is `(2 + 3) * 4`.
///
/// # Errors
/// - [`RuntimeError::OperandMismatch`] if the stream does not hold exactly one
///   more operand than operators.
/// - [`RuntimeError::UnknownOperator`] if a symbol has no operation mapped to
///   it.
///
/// # Example
/// ```
/// use calculable::{ast::TokenStream, interpreter::evaluator::evaluate};
///
/// let stream = TokenStream::new(vec![2.0, 3.0, 4.0], vec!['+', '*']);
/// assert_eq!(evaluate(&stream).unwrap(), 20.0);
/// ```
pub fn evaluate(stream: &TokenStream) -> EvalResult<f64> {
    let TokenStream { operands, operators } = stream;

    let Some((&first, rest)) = operands.split_first() else {
        return Err(mismatch(stream));
    };
    if !stream.is_balanced() {
        return Err(mismatch(stream));
    }

    let mut result = first;
    for (&symbol, &operand) in operators.iter().zip(rest) {
        let op = Operator::try_from(symbol)?;
        let next = op.apply(result, operand);
        trace!("{result} {op} {operand} = {next}");
        result = next;
    }

    debug!("folded {} operators into {result}", operators.len());
    Ok(result)
}

fn mismatch(stream: &TokenStream) -> RuntimeError {
    RuntimeError::OperandMismatch { operands:  stream.operands.len(),
                                    operators: stream.operators.len(), }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold(operands: &[f64], operators: &str) -> EvalResult<f64> {
        evaluate(&TokenStream::new(operands.to_vec(), operators.chars().collect()))
    }

    #[test]
    fn single_operand_is_the_result() {
        assert_eq!(fold(&[7.5], ""), Ok(7.5));
    }

    #[test]
    fn folds_without_precedence() {
        assert_eq!(fold(&[2.0, 3.0, 4.0], "+*"), Ok(20.0));
        assert_eq!(fold(&[10.0, 4.0, 2.0], "-/"), Ok(3.0));
        assert_eq!(fold(&[1.0, 2.0, 3.0, 4.0], "-*+"), Ok(1.0));
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        assert_eq!(fold(&[2.0, 0.0], "/"), Ok(f64::INFINITY));
        assert!(fold(&[0.0, 0.0], "/").unwrap().is_nan());
    }

    #[test]
    fn unknown_operator_is_rejected() {
        assert_eq!(fold(&[2.0, 3.0], "^"), Err(RuntimeError::UnknownOperator { symbol: '^' }));
    }

    #[test]
    fn unknown_operator_later_in_the_stream_still_fails() {
        assert_eq!(fold(&[2.0, 3.0, 4.0], "+%"),
                   Err(RuntimeError::UnknownOperator { symbol: '%' }));
    }

    #[test]
    fn unbalanced_streams_are_rejected() {
        assert_eq!(fold(&[], ""),
                   Err(RuntimeError::OperandMismatch { operands:  0,
                                                       operators: 0, }));
        assert_eq!(fold(&[1.0], "+"),
                   Err(RuntimeError::OperandMismatch { operands:  1,
                                                       operators: 1, }));
        assert_eq!(fold(&[1.0, 2.0, 3.0], "+"),
                   Err(RuntimeError::OperandMismatch { operands:  3,
                                                       operators: 1, }));
    }
}
