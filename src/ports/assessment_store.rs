//! Assessment Store Port - Interface for persisting finished assessments.
//!
//! One record per patient, keyed by patient name. A new assessment for the
//! same patient replaces the previous record.

use async_trait::async_trait;

use crate::domain::assessment::MotivationScore;
use crate::domain::foundation::{DomainError, ErrorCode, PatientName};

/// Prefix of every stored record's key.
pub const STORAGE_KEY_PREFIX: &str = "readinessAssessment_";

/// Key under which a patient's assessment is stored.
pub fn storage_key(patient: &PatientName) -> String {
    format!("{}{}", STORAGE_KEY_PREFIX, patient.as_str())
}

/// Errors that can occur during assessment storage operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to serialize assessment: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize assessment: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for saving and loading a patient's latest MotivationScore
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Save (or replace) the patient's assessment
    async fn save(&self, patient: &PatientName, score: &MotivationScore)
        -> Result<(), StoreError>;

    /// Load the patient's assessment, `None` if nothing was saved
    async fn load(&self, patient: &PatientName) -> Result<Option<MotivationScore>, StoreError>;

    /// Check if an assessment exists for the patient
    async fn exists(&self, patient: &PatientName) -> Result<bool, StoreError>;

    /// Delete the patient's assessment; deleting a missing record is not an error
    async fn delete(&self, patient: &PatientName) -> Result<(), StoreError>;
}
