//! Assessment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Reasons an assessment operation is rejected.
///
/// Every variant leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    #[error("Question '{0}' is not part of this assessment")]
    UnknownQuestion(String),

    #[error("Value {value} is not an option for question '{question_id}'")]
    InvalidAnswer { question_id: String, value: u8 },

    #[error("Question '{0}' has not been answered yet")]
    Unanswered(String),

    #[error("Assessment is incomplete, missing: {}", missing.join(", "))]
    IncompleteAssessment { missing: Vec<String> },

    #[error(transparent)]
    InvalidRating(#[from] ValidationError),

    #[error("Score {score} lies outside every stage bucket")]
    UnknownStage { score: f64 },

    #[error("No question is currently shown")]
    NoCurrentQuestion,

    #[error("Assessment has already been completed")]
    AlreadyCompleted,
}

impl AssessmentError {
    pub fn invalid_answer(question_id: impl Into<String>, value: u8) -> Self {
        AssessmentError::InvalidAnswer {
            question_id: question_id.into(),
            value,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::UnknownQuestion(_) => ErrorCode::UnknownQuestion,
            AssessmentError::InvalidAnswer { .. } => ErrorCode::InvalidAnswer,
            AssessmentError::Unanswered(_) => ErrorCode::IncompleteAssessment,
            AssessmentError::IncompleteAssessment { .. } => ErrorCode::IncompleteAssessment,
            AssessmentError::InvalidRating(err) => err.code(),
            AssessmentError::UnknownStage { .. } => ErrorCode::UnknownStage,
            AssessmentError::NoCurrentQuestion => ErrorCode::InvalidStateTransition,
            AssessmentError::AlreadyCompleted => ErrorCode::InvalidStateTransition,
        }
    }
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            AssessmentError::InvalidAnswer { question_id, value } => domain
                .with_detail("question_id", question_id)
                .with_detail("value", value.to_string()),
            AssessmentError::IncompleteAssessment { missing } => {
                domain.with_detail("missing", missing.join(","))
            }
            _ => domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_lists_missing_parts() {
        let err = AssessmentError::IncompleteAssessment {
            missing: vec!["timeline".to_string(), "confidence_rating".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Assessment is incomplete, missing: timeline, confidence_rating"
        );
    }

    #[test]
    fn invalid_answer_carries_details_into_domain_error() {
        let err: DomainError = AssessmentError::invalid_answer("timeline", 9).into();
        assert_eq!(err.code, ErrorCode::InvalidAnswer);
        assert_eq!(err.details.get("question_id"), Some(&"timeline".to_string()));
        assert_eq!(err.details.get("value"), Some(&"9".to_string()));
    }

    #[test]
    fn rating_errors_keep_validation_code() {
        let err: AssessmentError =
            ValidationError::out_of_range("importance_rating", 1, 10, 0).into();
        assert_eq!(err.code(), ErrorCode::OutOfRange);
    }

    #[test]
    fn unknown_stage_maps_to_its_code() {
        let err = AssessmentError::UnknownStage { score: -1.0 };
        assert_eq!(err.code(), ErrorCode::UnknownStage);
    }
}
