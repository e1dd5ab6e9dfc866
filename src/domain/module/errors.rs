//! Module-level error types.

use thiserror::Error;

use super::ModuleStage;
use crate::domain::assessment::AssessmentError;
use crate::domain::coaching::CoachingError;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Reasons a module operation is rejected. The module state is unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModuleError {
    #[error("Cannot handle '{event}' while on the {from} screen")]
    InvalidTransition { from: ModuleStage, event: &'static str },

    #[error(transparent)]
    Assessment(#[from] AssessmentError),

    #[error(transparent)]
    Coaching(#[from] CoachingError),
}

impl ModuleError {
    pub fn invalid_transition(from: ModuleStage, event: &'static str) -> Self {
        ModuleError::InvalidTransition { from, event }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ModuleError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            ModuleError::Assessment(err) => err.code(),
            ModuleError::Coaching(err) => err.code(),
        }
    }
}

impl From<ModuleError> for DomainError {
    fn from(err: ModuleError) -> Self {
        let message = err.to_string();
        match err {
            ModuleError::InvalidTransition { from, event } => {
                DomainError::new(ErrorCode::InvalidStateTransition, message)
                    .with_detail("from", from.to_string())
                    .with_detail("event", event)
            }
            ModuleError::Assessment(inner) => inner.into(),
            ModuleError::Coaching(inner) => inner.into(),
        }
    }
}
