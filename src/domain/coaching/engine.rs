//! Keyword-driven reply selection for the coaching chat.
//!
//! Each utterance is matched, case-insensitively, against an ordered list of
//! marker groups. The first group with a hit decides the reply; if none hit,
//! the coach asks a random open question from the stage's script.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::scripts::{
    self, StageScript, ANXIETY_MARKERS, ANXIETY_REPLY, FAMILY_MARKERS, FAMILY_REPLY,
    NEGATION_MARKERS, READINESS_MARKERS, READINESS_REPLY,
};
use super::{ChatMessage, CoachingError, MessageType};
use crate::domain::assessment::MotivationStage;

/// Which rule produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyRule {
    Negation,
    Readiness,
    Anxiety,
    Family,
    OpenQuestion,
}

impl ReplyRule {
    /// Marker-driven rules, highest priority first.
    pub const PRIORITY: [ReplyRule; 4] = [
        ReplyRule::Negation,
        ReplyRule::Readiness,
        ReplyRule::Anxiety,
        ReplyRule::Family,
    ];

    pub fn markers(&self) -> &'static [&'static str] {
        match self {
            ReplyRule::Negation => NEGATION_MARKERS,
            ReplyRule::Readiness => READINESS_MARKERS,
            ReplyRule::Anxiety => ANXIETY_MARKERS,
            ReplyRule::Family => FAMILY_MARKERS,
            ReplyRule::OpenQuestion => &[],
        }
    }

    pub fn message_type(&self) -> MessageType {
        match self {
            ReplyRule::Negation => MessageType::Reflection,
            ReplyRule::Readiness => MessageType::Affirmation,
            ReplyRule::Anxiety | ReplyRule::Family | ReplyRule::OpenQuestion => {
                MessageType::Question
            }
        }
    }

    /// First rule whose markers occur in `utterance` (substring match).
    pub fn matching(utterance: &str) -> ReplyRule {
        let lowered = utterance.to_lowercase();
        Self::PRIORITY
            .into_iter()
            .find(|rule| rule.markers().iter().any(|m| lowered.contains(m)))
            .unwrap_or(ReplyRule::OpenQuestion)
    }
}

/// A selected coach reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub rule: ReplyRule,
    pub content: &'static str,
}

impl Reply {
    pub fn message_type(&self) -> MessageType {
        self.rule.message_type()
    }

    /// Stamps the reply as a bot message.
    pub fn into_message(self) -> Result<ChatMessage, CoachingError> {
        ChatMessage::bot(self.content, self.message_type())
    }
}

/// Selects scripted replies; randomness comes only from the injected `R`.
#[derive(Debug, Clone)]
pub struct DialogueEngine<R = StdRng> {
    rng: R,
}

impl DialogueEngine<StdRng> {
    /// Engine seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Engine with a fixed seed, for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DialogueEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// The coach's greeting for a freshly opened chat.
    pub fn opening(
        &self,
        stage: MotivationStage,
        physician_name: &str,
    ) -> Result<ChatMessage, CoachingError> {
        let script = scripts::script_for_stage(stage);
        ChatMessage::bot(
            scripts::opening_message(physician_name, script),
            MessageType::Message,
        )
    }

    /// Picks the reply to `utterance` for a patient at `stage`.
    pub fn respond(
        &mut self,
        stage: MotivationStage,
        utterance: &str,
    ) -> Result<Reply, CoachingError> {
        self.respond_with(scripts::script_for_stage(stage), utterance)
    }

    /// Like `respond`, keyed by a raw stage label. Unknown labels use the
    /// contemplation script.
    pub fn respond_to_label(
        &mut self,
        stage_label: &str,
        utterance: &str,
    ) -> Result<Reply, CoachingError> {
        self.respond_with(scripts::script_for_label(stage_label), utterance)
    }

    fn respond_with(
        &mut self,
        script: &'static StageScript,
        utterance: &str,
    ) -> Result<Reply, CoachingError> {
        if utterance.trim().is_empty() {
            return Err(CoachingError::EmptyUtterance);
        }

        let rule = ReplyRule::matching(utterance);
        let content = match rule {
            ReplyRule::Negation => self.pick(script.reflections, script),
            ReplyRule::Readiness => READINESS_REPLY,
            ReplyRule::Anxiety => ANXIETY_REPLY,
            ReplyRule::Family => FAMILY_REPLY,
            ReplyRule::OpenQuestion => self.pick(script.questions, script),
        };
        Ok(Reply { rule, content })
    }

    fn pick(&mut self, items: &'static [&'static str], script: &'static StageScript) -> &'static str {
        items
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(script.opening)
    }
}
