use thiserror::Error;

/// Represents all errors that can occur while folding a token stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The operator symbol has no binary operation mapped to it.
    #[error("unknown operator '{symbol}'")]
    UnknownOperator {
        /// The unmapped symbol.
        symbol: char,
    },
    /// The stream does not hold exactly one more operand than operators.
    #[error("token stream holds {operands} operands for {operators} operators")]
    OperandMismatch {
        /// Number of operands in the stream.
        operands:  usize,
        /// Number of operators in the stream.
        operators: usize,
    },
}
