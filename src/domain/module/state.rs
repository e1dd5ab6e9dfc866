//! Module state as a tagged union, and the pure transition function over it.

use std::sync::Arc;

use super::{ModuleError, ModuleStage};
use crate::domain::assessment::{AssessmentSession, MotivationScore, QuestionBank};
use crate::domain::coaching::{ChatMessage, ChatTranscript};
use crate::domain::foundation::StateMachine;

/// What the module holds on each screen.
///
/// Results and Chat cannot exist without a score.
#[derive(Debug, Clone)]
pub enum ModuleState {
    Assessment(AssessmentSession),
    Results(MotivationScore),
    Chat {
        score: MotivationScore,
        transcript: ChatTranscript,
    },
}

/// Inputs that move the module between screens.
#[derive(Debug, Clone)]
pub enum ModuleEvent {
    /// The questionnaire produced a score.
    AssessmentCompleted(MotivationScore),
    /// The patient asked to talk to the coach; carries the coach's greeting.
    CoachingRequested { opening: ChatMessage },
    /// A fresh score replaces the one being coached on.
    ScoreUpdated(MotivationScore),
    /// Start over with an empty questionnaire.
    RetakeRequested,
}

impl ModuleEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ModuleEvent::AssessmentCompleted(_) => "assessment_completed",
            ModuleEvent::CoachingRequested { .. } => "coaching_requested",
            ModuleEvent::ScoreUpdated(_) => "score_updated",
            ModuleEvent::RetakeRequested => "retake_requested",
        }
    }

    fn target(&self) -> ModuleStage {
        match self {
            ModuleEvent::AssessmentCompleted(_) | ModuleEvent::ScoreUpdated(_) => {
                ModuleStage::Results
            }
            ModuleEvent::CoachingRequested { .. } => ModuleStage::Chat,
            ModuleEvent::RetakeRequested => ModuleStage::Assessment,
        }
    }
}

impl ModuleState {
    /// A fresh questionnaire over `bank`.
    pub fn initial(bank: Arc<QuestionBank>) -> Self {
        ModuleState::Assessment(AssessmentSession::new(bank))
    }

    pub fn stage(&self) -> ModuleStage {
        match self {
            ModuleState::Assessment(_) => ModuleStage::Assessment,
            ModuleState::Results(_) => ModuleStage::Results,
            ModuleState::Chat { .. } => ModuleStage::Chat,
        }
    }

    pub fn score(&self) -> Option<&MotivationScore> {
        match self {
            ModuleState::Assessment(_) => None,
            ModuleState::Results(score) | ModuleState::Chat { score, .. } => Some(score),
        }
    }

    /// Computes the state after `event` without touching `self`.
    ///
    /// `bank` seeds the new questionnaire on retake.
    pub fn transition(
        &self,
        event: ModuleEvent,
        bank: &Arc<QuestionBank>,
    ) -> Result<ModuleState, ModuleError> {
        let from = self.stage();
        let name = event.name();
        from.transition_to(event.target())
            .map_err(|_| ModuleError::invalid_transition(from, name))?;

        match (self, event) {
            (ModuleState::Assessment(_), ModuleEvent::AssessmentCompleted(score)) => {
                Ok(ModuleState::Results(score))
            }
            (ModuleState::Results(score), ModuleEvent::CoachingRequested { opening }) => {
                Ok(ModuleState::Chat {
                    score: score.clone(),
                    transcript: ChatTranscript::started_with(opening),
                })
            }
            (ModuleState::Chat { .. }, ModuleEvent::ScoreUpdated(score)) => {
                Ok(ModuleState::Results(score))
            }
            (_, ModuleEvent::RetakeRequested) => Ok(ModuleState::initial(Arc::clone(bank))),
            _ => Err(ModuleError::invalid_transition(from, name)),
        }
    }
}
