use thiserror::Error;

use crate::lock::LockError;
use crate::model::ShoeId;

/// Error type for every store operation.
///
/// Variants classify the failure by kind only; the HTTP adapter decides the
/// user-facing message and status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with this identifier exists (never existed or was deleted).
    #[error("shoe {0} not found")]
    NotFound(ShoeId),
    /// Rating value outside `1..=5`. Rejected before any mutation.
    #[error("rating {0} is outside the allowed range 1..=5")]
    InvalidRating(i64),
    /// Empty or malformed shoe name. Rejected before any mutation.
    #[error("invalid shoe name: {0}")]
    InvalidName(String),
    /// The persistence layer could not complete the operation. Nothing was applied.
    #[error("storage failure: {0}")]
    StorageFailure(String),
}

impl StoreError {
    pub(crate) fn storage(message: impl Into<String>) -> Self {
        StoreError::StorageFailure(message.into())
    }

    /// True for errors caused by caller input rather than store state.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidRating(_) | StoreError::InvalidName(_)
        )
    }
}

impl From<LockError> for StoreError {
    fn from(err: LockError) -> Self {
        StoreError::StorageFailure(err.to_string())
    }
}
