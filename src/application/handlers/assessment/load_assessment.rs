//! LoadAssessmentHandler - Query handler for a patient's saved assessment.

use std::sync::Arc;
use tracing::debug;

use crate::domain::assessment::MotivationScore;
use crate::domain::foundation::PatientName;
use crate::ports::{AssessmentStore, StoreError};

/// Query for a patient's most recent assessment.
#[derive(Debug, Clone)]
pub struct LoadAssessmentQuery {
    pub patient: PatientName,
}

/// Handler for loading saved assessments.
pub struct LoadAssessmentHandler {
    store: Arc<dyn AssessmentStore>,
}

impl LoadAssessmentHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    /// Returns the saved score, or `None` if the patient has not finished an
    /// assessment yet.
    pub async fn handle(
        &self,
        query: LoadAssessmentQuery,
    ) -> Result<Option<MotivationScore>, StoreError> {
        let score = self.store.load(&query.patient).await?;
        debug!(patient = %query.patient.as_str(), found = score.is_some(), "assessment lookup");
        Ok(score)
    }
}
