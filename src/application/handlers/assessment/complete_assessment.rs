//! CompleteAssessmentHandler - Command handler for finishing the questionnaire.
//!
//! Scores the module's assessment, moves it to results and saves the score.
//! A save failure is logged and reported but does not undo the result.

use rand::Rng;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::assessment::MotivationScore;
use crate::domain::foundation::PatientName;
use crate::domain::module::{ModuleError, MotivationModule};
use crate::ports::AssessmentStore;

/// Command to complete a patient's assessment.
#[derive(Debug, Clone)]
pub struct CompleteAssessmentCommand {
    pub patient: PatientName,
}

/// Result of a completed assessment.
#[derive(Debug, Clone)]
pub struct CompleteAssessmentResult {
    pub score: MotivationScore,
    /// False when the store rejected the write.
    pub persisted: bool,
}

/// Handler for completing assessments.
pub struct CompleteAssessmentHandler {
    store: Arc<dyn AssessmentStore>,
}

impl CompleteAssessmentHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    pub async fn handle<R: Rng>(
        &self,
        module: &mut MotivationModule<R>,
        cmd: CompleteAssessmentCommand,
    ) -> Result<CompleteAssessmentResult, ModuleError> {
        // 1. Score and move to results
        let score = module.complete_assessment()?;

        // 2. Persist; the score stays valid even if this fails
        let persisted = match self.store.save(&cmd.patient, &score).await {
            Ok(()) => {
                info!(patient = %cmd.patient.as_str(), stage = %score.stage(), "assessment saved");
                true
            }
            Err(err) => {
                warn!(patient = %cmd.patient.as_str(), error = %err, "failed to save assessment");
                false
            }
        };

        Ok(CompleteAssessmentResult { score, persisted })
    }
}
