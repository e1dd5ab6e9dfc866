//! Assessment session: walks the questionnaire, collects answers and rulers.

use std::sync::Arc;
use tracing::debug;

use super::question::{AnswerSet, Question, QuestionBank};
use super::{AssessmentError, MotivationScore};
use crate::domain::foundation::{Percentage, RulerRating};

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentPhase {
    /// Showing the question at this index.
    Question(usize),
    /// Collecting importance and confidence rulers.
    Ratings,
    /// A score has been produced.
    Completed,
}

/// One pass through the questionnaire.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    bank: Arc<QuestionBank>,
    answers: AnswerSet,
    phase: AssessmentPhase,
    importance: Option<RulerRating>,
    confidence: Option<RulerRating>,
}

impl AssessmentSession {
    /// Starts at the first question of `bank`.
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            answers: AnswerSet::new(),
            phase: AssessmentPhase::Question(0),
            importance: None,
            confidence: None,
        }
    }

    /// Starts a session over the standard questionnaire.
    pub fn standard() -> Self {
        Self::new(QuestionBank::standard())
    }

    pub fn bank(&self) -> &Arc<QuestionBank> {
        &self.bank
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn phase(&self) -> AssessmentPhase {
        self.phase
    }

    pub fn importance(&self) -> Option<RulerRating> {
        self.importance
    }

    pub fn confidence(&self) -> Option<RulerRating> {
        self.confidence
    }

    /// The question being shown, if the session is on one.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            AssessmentPhase::Question(index) => self.bank.get(index),
            _ => None,
        }
    }

    /// 1-based number of the current question.
    pub fn position(&self) -> Option<usize> {
        match self.phase {
            AssessmentPhase::Question(index) => Some(index + 1),
            _ => None,
        }
    }

    /// Progress through the questions, counting the current one as reached.
    pub fn progress(&self) -> Percentage {
        match self.phase {
            AssessmentPhase::Question(index) => Percentage::of(index + 1, self.bank.len()),
            AssessmentPhase::Ratings | AssessmentPhase::Completed => Percentage::HUNDRED,
        }
    }

    /// Records (or overwrites) the answer to `question_id`.
    pub fn answer(&mut self, question_id: &str, value: u8) -> Result<(), AssessmentError> {
        self.ensure_open()?;
        let question = self
            .bank
            .find(question_id)
            .ok_or_else(|| AssessmentError::UnknownQuestion(question_id.to_string()))?;
        if !question.accepts(value) {
            return Err(AssessmentError::invalid_answer(question_id, value));
        }
        self.answers.record(question_id, value);
        debug!(question_id, value, "answer recorded");
        Ok(())
    }

    /// Answers whichever question is currently shown.
    pub fn answer_current(&mut self, value: u8) -> Result<(), AssessmentError> {
        let question_id = match self.current_question() {
            Some(question) => question.id.clone(),
            None => {
                self.ensure_open()?;
                return Err(AssessmentError::NoCurrentQuestion);
            }
        };
        self.answer(&question_id, value)
    }

    /// True iff the current question has a recorded answer.
    pub fn can_advance(&self) -> bool {
        self.current_question()
            .is_some_and(|q| self.answers.contains(&q.id))
    }

    /// Moves to the next question, or into the ratings phase after the last one.
    pub fn advance(&mut self) -> Result<AssessmentPhase, AssessmentError> {
        let index = match self.phase {
            AssessmentPhase::Question(index) => index,
            // Already past the questions; nothing to advance over.
            AssessmentPhase::Ratings => return Ok(self.phase),
            AssessmentPhase::Completed => return Err(AssessmentError::AlreadyCompleted),
        };
        if !self.can_advance() {
            let id = self
                .current_question()
                .map(|q| q.id.clone())
                .unwrap_or_default();
            return Err(AssessmentError::Unanswered(id));
        }
        self.phase = if index + 1 < self.bank.len() {
            AssessmentPhase::Question(index + 1)
        } else {
            AssessmentPhase::Ratings
        };
        debug!(phase = ?self.phase, "assessment advanced");
        Ok(self.phase)
    }

    /// Moves back one question; stays put on the first. From ratings, returns to the last question.
    pub fn retreat(&mut self) -> AssessmentPhase {
        self.phase = match self.phase {
            AssessmentPhase::Question(index) => AssessmentPhase::Question(index.saturating_sub(1)),
            AssessmentPhase::Ratings => {
                AssessmentPhase::Question(self.bank.len().saturating_sub(1))
            }
            AssessmentPhase::Completed => AssessmentPhase::Completed,
        };
        self.phase
    }

    pub fn set_importance(&mut self, value: u8) -> Result<(), AssessmentError> {
        self.ensure_open()?;
        self.importance = Some(RulerRating::named("importance_rating", value)?);
        Ok(())
    }

    pub fn set_confidence(&mut self, value: u8) -> Result<(), AssessmentError> {
        self.ensure_open()?;
        self.confidence = Some(RulerRating::named("confidence_rating", value)?);
        Ok(())
    }

    /// Names of everything still needed before `complete` can succeed.
    pub fn missing(&self) -> Vec<String> {
        let mut missing: Vec<String> = self
            .bank
            .questions()
            .iter()
            .filter(|q| !self.answers.contains(&q.id))
            .map(|q| q.id.clone())
            .collect();
        if self.importance.is_none() {
            missing.push("importance_rating".to_string());
        }
        if self.confidence.is_none() {
            missing.push("confidence_rating".to_string());
        }
        missing
    }

    /// Produces the final score once every question and both rulers are in.
    pub fn complete(&mut self) -> Result<MotivationScore, AssessmentError> {
        self.ensure_open()?;
        let missing = self.missing();
        let (Some(importance), Some(confidence)) = (self.importance, self.confidence) else {
            return Err(AssessmentError::IncompleteAssessment { missing });
        };
        if !missing.is_empty() {
            return Err(AssessmentError::IncompleteAssessment { missing });
        }

        let score = MotivationScore::from_answers(&self.answers, importance, confidence)?;
        self.phase = AssessmentPhase::Completed;
        debug!(stage = %score.stage(), score = score.score(), "assessment completed");
        Ok(score)
    }

    fn ensure_open(&self) -> Result<(), AssessmentError> {
        if self.phase == AssessmentPhase::Completed {
            return Err(AssessmentError::AlreadyCompleted);
        }
        Ok(())
    }
}
