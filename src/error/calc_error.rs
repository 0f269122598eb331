use thiserror::Error;

use crate::error::{ParseError, RuntimeError};

/// Either stage of an evaluation failed.
///
/// The inner error is kept as is, so callers can match on the exact kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The expression was rejected by the tokenizer/validator.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The token stream could not be folded.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl CalcError {
    /// Returns `true` when the expression itself is malformed, as opposed to
    /// a failure inside the evaluator.
    ///
    /// # Example
    /// ```
    /// use calculable::{error::ParseError, evaluate_str};
    ///
    /// let err = evaluate_str("2++3").unwrap_err();
    /// assert!(err.is_syntax_error());
    /// assert_eq!(err.parse_error(), Some(&ParseError::ConsecutiveOperators { position: 2 }));
    /// ```
    #[must_use]
    pub const fn is_syntax_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns the syntax error, if this is one.
    #[must_use]
    pub const fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(_) => None,
        }
    }
}
