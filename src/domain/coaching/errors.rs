//! Coaching chat error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Reasons a coaching chat operation is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoachingError {
    #[error("Message cannot be empty")]
    EmptyUtterance,

    #[error("Typing delay bounds are inverted: {min_ms}ms > {max_ms}ms")]
    InvalidDelayBounds { min_ms: u64, max_ms: u64 },
}

impl CoachingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CoachingError::EmptyUtterance => ErrorCode::EmptyUtterance,
            CoachingError::InvalidDelayBounds { .. } => ErrorCode::ValidationFailed,
        }
    }
}

impl From<CoachingError> for DomainError {
    fn from(err: CoachingError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
