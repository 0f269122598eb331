use std::num::ParseFloatError;

use thiserror::Error;

/// Represents all errors that can occur while tokenizing and validating an
/// expression.
///
/// Positions are byte offsets into the original, untrimmed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contains nothing but whitespace.
    #[error("expression is empty")]
    EmptyExpression,
    /// The first significant character is not a digit.
    #[error("expression must start with an operand")]
    StartsWithOperator,
    /// The last significant character is not a digit.
    #[error("expression must end with an operand")]
    EndsWithOperator,
    /// A `.` immediately follows another `.` inside one operand.
    #[error("invalid format: consecutive dots at position {position}")]
    DoubleDot {
        /// Byte offset of the second dot.
        position: usize,
    },
    /// An operator follows another operator with no operand between them.
    #[error("invalid format: consecutive operators at position {position}")]
    ConsecutiveOperators {
        /// Byte offset of the offending operator.
        position: usize,
    },
    /// A character outside digits, `.`, whitespace and `+ - * /`.
    #[error("unknown character '{character}' in expression at position {position}")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// Byte offset of the rejected character.
        position:  usize,
    },
    /// The accumulated operand text is not a valid decimal number.
    #[error("invalid number '{text}': {source}")]
    MalformedNumber {
        /// The operand text as it was accumulated.
        text:   String,
        /// The underlying float parse failure.
        source: ParseFloatError,
    },
    /// The operand text is a valid number too large to be represented.
    #[error("number '{text}' is out of range")]
    OutOfRange {
        /// The operand text as it was accumulated.
        text: String,
    },
}

/// Result type used by the tokenizer/validator.
pub type ParseResult<T> = Result<T, ParseError>;
