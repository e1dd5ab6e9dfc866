//! MotivationModule aggregate - owns the screen state and the coach.
//!
//! Every screen change goes through `ModuleState::transition`; the aggregate
//! only gathers the inputs an event needs (a finished score, the coach's
//! greeting) and swaps in the resulting state.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use super::{ModuleError, ModuleEvent, ModuleStage, ModuleState};
use crate::domain::assessment::{AssessmentSession, MotivationScore, QuestionBank};
use crate::domain::coaching::{ChatMessage, ChatTranscript, DialogueEngine};

/// The assessment → results → chat flow for one patient.
#[derive(Debug)]
pub struct MotivationModule<R = StdRng> {
    bank: Arc<QuestionBank>,
    physician_name: String,
    engine: DialogueEngine<R>,
    state: ModuleState,
}

impl<R: Rng> MotivationModule<R> {
    /// Opens on a fresh questionnaire.
    pub fn new(
        bank: Arc<QuestionBank>,
        physician_name: impl Into<String>,
        engine: DialogueEngine<R>,
    ) -> Self {
        let state = ModuleState::initial(Arc::clone(&bank));
        Self {
            bank,
            physician_name: physician_name.into(),
            engine,
            state,
        }
    }

    /// Opens directly on the results of a previously saved assessment.
    pub fn resume(
        bank: Arc<QuestionBank>,
        physician_name: impl Into<String>,
        engine: DialogueEngine<R>,
        score: MotivationScore,
    ) -> Self {
        info!(stage = %score.stage(), "resuming module from saved score");
        Self {
            bank,
            physician_name: physician_name.into(),
            engine,
            state: ModuleState::Results(score),
        }
    }

    pub fn stage(&self) -> ModuleStage {
        self.state.stage()
    }

    pub fn state(&self) -> &ModuleState {
        &self.state
    }

    pub fn physician_name(&self) -> &str {
        &self.physician_name
    }

    pub fn score(&self) -> Option<&MotivationScore> {
        self.state.score()
    }

    pub fn session(&self) -> Option<&AssessmentSession> {
        match &self.state {
            ModuleState::Assessment(session) => Some(session),
            _ => None,
        }
    }

    /// The live questionnaire; only available on the assessment screen.
    pub fn session_mut(&mut self) -> Result<&mut AssessmentSession, ModuleError> {
        let from = self.stage();
        match &mut self.state {
            ModuleState::Assessment(session) => Ok(session),
            _ => Err(ModuleError::invalid_transition(from, "answer")),
        }
    }

    pub fn transcript(&self) -> Option<&ChatTranscript> {
        match &self.state {
            ModuleState::Chat { transcript, .. } => Some(transcript),
            _ => None,
        }
    }

    /// Scores the questionnaire and shows the results.
    ///
    /// The returned score is what the caller should persist.
    pub fn complete_assessment(&mut self) -> Result<MotivationScore, ModuleError> {
        let score = self.session_mut()?.complete()?;
        self.apply(ModuleEvent::AssessmentCompleted(score.clone()))?;
        Ok(score)
    }

    /// Moves from results into the coaching chat.
    pub fn start_chat(&mut self) -> Result<&ChatTranscript, ModuleError> {
        let stage = self
            .score()
            .map(MotivationScore::stage)
            .ok_or_else(|| ModuleError::invalid_transition(self.stage(), "coaching_requested"))?;
        let opening = self.engine.opening(stage, &self.physician_name)?;
        self.apply(ModuleEvent::CoachingRequested { opening })?;
        self.transcript()
            .ok_or_else(|| ModuleError::invalid_transition(self.stage(), "coaching_requested"))
    }

    /// Leaves the chat with a replacement score.
    pub fn update_score(&mut self, score: MotivationScore) -> Result<(), ModuleError> {
        self.apply(ModuleEvent::ScoreUpdated(score))
    }

    /// Discards score and answers and restarts the questionnaire.
    ///
    /// Every stage has an edge back to the assessment, so this only fails
    /// if that edge is removed from `ModuleStage`.
    pub fn retake(&mut self) -> Result<(), ModuleError> {
        self.apply(ModuleEvent::RetakeRequested)
    }

    /// Appends the patient's message and the coach's reply to the chat.
    ///
    /// Returns the reply. Nothing is appended if either message is rejected.
    pub fn send_message(&mut self, text: &str) -> Result<ChatMessage, ModuleError> {
        let from = self.stage();
        let ModuleState::Chat { score, transcript } = &mut self.state else {
            return Err(ModuleError::invalid_transition(from, "send_message"));
        };

        let user_message = ChatMessage::user(text)?;
        let reply = self.engine.respond(score.stage(), text)?;
        let rule = reply.rule;
        let bot_message = reply.into_message()?;

        transcript.append(user_message);
        transcript.append(bot_message.clone());
        debug!(?rule, messages = transcript.len(), "coach replied");
        Ok(bot_message)
    }

    fn apply(&mut self, event: ModuleEvent) -> Result<(), ModuleError> {
        let from = self.stage();
        let next = self.state.transition(event, &self.bank)?;
        self.state = next;
        info!(%from, to = %self.stage(), "module transitioned");
        Ok(())
    }
}
