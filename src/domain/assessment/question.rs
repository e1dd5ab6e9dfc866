//! Questionnaire data: questions, their options, and collected answers.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use super::MotivationStage;
use crate::domain::foundation::ValidationError;

/// Lowest value an answer option may carry.
pub const MIN_ANSWER_VALUE: u8 = 1;

/// Highest value an answer option may carry.
pub const MAX_ANSWER_VALUE: u8 = 5;

/// One selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: u8,
    pub label: String,
    /// Stage this answer on its own would suggest.
    pub stage: MotivationStage,
}

impl AnswerOption {
    pub fn new(value: u8, label: impl Into<String>, stage: MotivationStage) -> Self {
        Self {
            value,
            label: label.into(),
            stage,
        }
    }
}

/// A single assessment question with its ordered options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options,
        }
    }

    /// Returns the option carrying `value`, if the question defines one.
    pub fn option(&self, value: u8) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// True if `value` is one of this question's option values.
    pub fn accepts(&self, value: u8) -> bool {
        self.option(value).is_some()
    }
}

/// Immutable, ordered set of questions for one questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

static STANDARD_BANK: Lazy<Arc<QuestionBank>> = Lazy::new(|| {
    Arc::new(QuestionBank {
        questions: vec![
            Question::new(
                "change_intention",
                "How ready are you to make changes to prevent diabetes?",
                vec![
                    AnswerOption::new(1, "Not ready at all", MotivationStage::Precontemplation),
                    AnswerOption::new(2, "Not very ready", MotivationStage::Contemplation),
                    AnswerOption::new(3, "Somewhat ready", MotivationStage::Preparation),
                    AnswerOption::new(4, "Very ready", MotivationStage::Action),
                    AnswerOption::new(5, "Extremely ready", MotivationStage::Action),
                ],
            ),
            Question::new(
                "timeline",
                "When are you planning to start making health changes?",
                vec![
                    AnswerOption::new(1, "No plans to change", MotivationStage::Precontemplation),
                    AnswerOption::new(2, "Maybe in the future", MotivationStage::Contemplation),
                    AnswerOption::new(3, "Within the next month", MotivationStage::Preparation),
                    AnswerOption::new(4, "Already started", MotivationStage::Action),
                    AnswerOption::new(5, "Been doing it for months", MotivationStage::Maintenance),
                ],
            ),
        ],
    })
});

impl QuestionBank {
    /// Builds a bank, checking ids are unique and every option value is on the 1..=5 scale.
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if question.id.trim().is_empty() {
                return Err(ValidationError::empty_field("question.id"));
            }
            if !seen.insert(question.id.as_str()) {
                return Err(ValidationError::invalid_format(
                    "question.id",
                    format!("duplicate question id '{}'", question.id),
                ));
            }
            if question.options.is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "{}.options",
                    question.id
                )));
            }
            let mut values = HashSet::new();
            for option in &question.options {
                if !(MIN_ANSWER_VALUE..=MAX_ANSWER_VALUE).contains(&option.value) {
                    return Err(ValidationError::out_of_range(
                        format!("{}.options.value", question.id),
                        MIN_ANSWER_VALUE as i32,
                        MAX_ANSWER_VALUE as i32,
                        option.value as i32,
                    ));
                }
                if !values.insert(option.value) {
                    return Err(ValidationError::invalid_format(
                        format!("{}.options.value", question.id),
                        format!("duplicate option value {}", option.value),
                    ));
                }
            }
        }

        Ok(Self { questions })
    }

    /// The diabetes-prevention readiness questionnaire.
    pub fn standard() -> Arc<QuestionBank> {
        Arc::clone(&STANDARD_BANK)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn find(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}

/// Answers collected so far, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, u8>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records or overwrites an answer. Validation is the session's job.
    pub(crate) fn record(&mut self, question_id: impl Into<String>, value: u8) {
        self.0.insert(question_id.into(), value);
    }

    pub fn get(&self, question_id: &str) -> Option<u8> {
        self.0.get(question_id).copied()
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, u8)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, u8)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(value: u8) -> AnswerOption {
        AnswerOption::new(value, format!("option {}", value), MotivationStage::Preparation)
    }

    mod standard_bank {
        use super::*;

        #[test]
        fn has_two_questions_in_order() {
            let bank = QuestionBank::standard();
            let ids: Vec<_> = bank.questions().iter().map(|q| q.id.as_str()).collect();
            assert_eq!(ids, vec!["change_intention", "timeline"]);
        }

        #[test]
        fn every_question_offers_one_through_five() {
            let bank = QuestionBank::standard();
            for question in bank.questions() {
                let values: Vec<u8> = question.options.iter().map(|o| o.value).collect();
                assert_eq!(values, vec![1, 2, 3, 4, 5]);
            }
        }

        #[test]
        fn passes_its_own_validation() {
            let bank = QuestionBank::standard();
            assert!(QuestionBank::new(bank.questions().to_vec()).is_ok());
        }

        #[test]
        fn timeline_top_answer_suggests_maintenance() {
            let bank = QuestionBank::standard();
            let timeline = bank.find("timeline").unwrap();
            assert_eq!(timeline.option(5).unwrap().stage, MotivationStage::Maintenance);
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn rejects_empty_bank() {
            assert!(QuestionBank::new(vec![]).is_err());
        }

        #[test]
        fn rejects_duplicate_ids() {
            let q = Question::new("q1", "Prompt", vec![option(1)]);
            assert!(QuestionBank::new(vec![q.clone(), q]).is_err());
        }

        #[test]
        fn rejects_off_scale_option() {
            let q = Question::new("q1", "Prompt", vec![option(6)]);
            assert!(QuestionBank::new(vec![q]).is_err());
        }

        #[test]
        fn rejects_question_without_options() {
            let q = Question::new("q1", "Prompt", vec![]);
            assert!(QuestionBank::new(vec![q]).is_err());
        }

        #[test]
        fn rejects_duplicate_option_values() {
            let q = Question::new("q1", "Prompt", vec![option(2), option(2)]);
            assert!(QuestionBank::new(vec![q]).is_err());
        }
    }

    mod answer_set {
        use super::*;

        #[test]
        fn record_overwrites_previous_value() {
            let mut answers = AnswerSet::new();
            answers.record("timeline", 2);
            answers.record("timeline", 4);
            assert_eq!(answers.get("timeline"), Some(4));
            assert_eq!(answers.len(), 1);
        }

        #[test]
        fn serializes_as_plain_map() {
            let answers: AnswerSet = [("change_intention", 2u8), ("timeline", 3u8)]
                .into_iter()
                .collect();
            let json = serde_json::to_string(&answers).unwrap();
            assert_eq!(json, r#"{"change_intention":2,"timeline":3}"#);
        }
    }
}
