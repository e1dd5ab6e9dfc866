//! File-based Assessment Store Adapter
//!
//! Stores each patient's assessment as a YAML file named after its storage
//! key, e.g. `readinessAssessment_Maria.yaml`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::assessment::MotivationScore;
use crate::domain::foundation::PatientName;
use crate::ports::{storage_key, AssessmentStore, StoreError};

/// File-based storage for finished assessments
#[derive(Debug, Clone)]
pub struct FileAssessmentStore {
    base_path: PathBuf,
}

impl FileAssessmentStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileAssessmentStore::new("./data/assessments");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path for a patient
    ///
    /// Bytes outside `[A-Za-z0-9_-]` are written as `%XX`, so every name maps
    /// to its own file and none can escape the base directory.
    pub fn file_path(&self, patient: &PatientName) -> PathBuf {
        self.base_path
            .join(format!("{}.yaml", encode_file_stem(&storage_key(patient))))
    }

    async fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))
    }
}

/// Percent-encodes everything but ASCII alphanumerics, `_` and `-`.
///
/// `%` itself is encoded, which keeps the mapping one-to-one.
fn encode_file_stem(key: &str) -> String {
    let mut stem = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            stem.push(char::from(byte));
        } else {
            stem.push_str(&format!("%{:02X}", byte));
        }
    }
    stem
}

#[async_trait]
impl AssessmentStore for FileAssessmentStore {
    async fn save(&self, patient: &PatientName, score: &MotivationScore) -> Result<(), StoreError> {
        self.ensure_dir().await?;

        let yaml = serde_yaml::to_string(score)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;

        let file_path = self.file_path(patient);
        fs::write(&file_path, yaml)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))?;

        debug!(path = %file_path.display(), "assessment written");
        Ok(())
    }

    async fn load(&self, patient: &PatientName) -> Result<Option<MotivationScore>, StoreError> {
        let file_path = self.file_path(patient);

        if !file_path.exists() {
            return Ok(None);
        }

        let yaml = fs::read_to_string(&file_path)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))?;

        let score = serde_yaml::from_str(&yaml)
            .map_err(|e| StoreError::DeserializationFailed(e.to_string()))?;

        Ok(Some(score))
    }

    async fn exists(&self, patient: &PatientName) -> Result<bool, StoreError> {
        Ok(self.file_path(patient).exists())
    }

    async fn delete(&self, patient: &PatientName) -> Result<(), StoreError> {
        let file_path = self.file_path(patient);
        if file_path.exists() {
            fs::remove_file(&file_path)
                .await
                .map_err(|e| StoreError::IoError(e.to_string()))?;
        }
        Ok(())
    }
}
