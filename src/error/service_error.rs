use thiserror::Error;

use crate::error::CalcError;

/// Represents all errors returned by the calculation service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// No calculation is stored under the requested id.
    #[error("calculation '{id}' not found")]
    NotFound {
        /// The requested id.
        id: String,
    },
    /// The id is not a UUID.
    #[error("bad id '{id}'")]
    InvalidId {
        /// The rejected id.
        id: String,
    },
    /// The history holds no calculations at all.
    #[error("no calculations stored")]
    EmptyHistory,
    /// The submitted expression could not be computed.
    #[error("validation failed: {0}")]
    Validation(#[from] CalcError),
}

impl ServiceError {
    /// Returns `true` when the caller submitted an expression that cannot be
    /// computed.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type used by the calculation service.
pub type ServiceResult<T> = Result<T, ServiceError>;
