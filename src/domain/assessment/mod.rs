//! Assessment domain module.
//!
//! Stage-of-change questionnaire: question bank, answer collection,
//! scoring and classification into one of five motivational stages.

mod errors;
mod question;
mod scoring;
mod session;
mod stage;

pub use errors::AssessmentError;
pub use question::{AnswerOption, AnswerSet, Question, QuestionBank, MAX_ANSWER_VALUE, MIN_ANSWER_VALUE};
pub use scoring::{
    CallToAction, MotivationScore, ScoreCalculator, StageClassifier,
    CONFIDENCE_OUTREACH_THRESHOLD, IMPORTANCE_OUTREACH_THRESHOLD,
};
pub use session::{AssessmentPhase, AssessmentSession};
pub use stage::{MotivationStage, StageProfile};
