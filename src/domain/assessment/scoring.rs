//! Score calculation and stage classification.
//!
//! The stage is a pure function of the average answer value. Ratings never
//! influence the stage; they only feed [`MotivationScore::needs_intervention`].

use serde::{Deserialize, Serialize};
use tracing::error;

use super::question::{AnswerSet, MAX_ANSWER_VALUE, MIN_ANSWER_VALUE};
use super::{AssessmentError, MotivationStage};
use crate::domain::foundation::RulerRating;

/// Importance below this flags the patient for outreach.
pub const IMPORTANCE_OUTREACH_THRESHOLD: u8 = 7;

/// Confidence below this flags the patient for outreach.
pub const CONFIDENCE_OUTREACH_THRESHOLD: u8 = 6;

/// Reduces an answer set to its average value.
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Mean of all recorded answers, or `None` when nothing was answered.
    pub fn average(answers: &AnswerSet) -> Option<f64> {
        if answers.is_empty() {
            return None;
        }
        let sum: u32 = answers.values().map(u32::from).sum();
        Some(f64::from(sum) / answers.len() as f64)
    }
}

/// Maps an average score onto a stage of change.
pub struct StageClassifier;

impl StageClassifier {
    /// Upper bounds (inclusive) of the first four buckets.
    pub const BOUNDARIES: [(f64, MotivationStage); 4] = [
        (1.5, MotivationStage::Precontemplation),
        (2.5, MotivationStage::Contemplation),
        (3.5, MotivationStage::Preparation),
        (4.5, MotivationStage::Action),
    ];

    /// Classifies `score`.
    ///
    /// Scores off the answer scale (or NaN) cannot come from a valid answer
    /// set, so they are reported as `UnknownStage` instead of being bucketed.
    pub fn classify(score: f64) -> Result<MotivationStage, AssessmentError> {
        let in_domain = score.is_finite()
            && score >= f64::from(MIN_ANSWER_VALUE)
            && score <= f64::from(MAX_ANSWER_VALUE);
        if !in_domain {
            error!(score, "average score outside the answer scale");
            return Err(AssessmentError::UnknownStage { score });
        }

        let stage = Self::BOUNDARIES
            .iter()
            .find(|(upper, _)| score <= *upper)
            .map(|(_, stage)| *stage)
            .unwrap_or(MotivationStage::Maintenance);
        Ok(stage)
    }
}

/// Finalized result of one assessment.
///
/// Immutable once built; a retake produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredScore")]
pub struct MotivationScore {
    stage: MotivationStage,
    score: f64,
    importance_rating: RulerRating,
    confidence_rating: RulerRating,
}

impl MotivationScore {
    /// Builds a score record, deriving the stage from `score`.
    pub fn new(
        score: f64,
        importance_rating: RulerRating,
        confidence_rating: RulerRating,
    ) -> Result<Self, AssessmentError> {
        let stage = StageClassifier::classify(score)?;
        Ok(Self {
            stage,
            score,
            importance_rating,
            confidence_rating,
        })
    }

    /// Averages `answers` and classifies the result.
    pub fn from_answers(
        answers: &AnswerSet,
        importance_rating: RulerRating,
        confidence_rating: RulerRating,
    ) -> Result<Self, AssessmentError> {
        let score = ScoreCalculator::average(answers).ok_or_else(|| {
            AssessmentError::IncompleteAssessment {
                missing: vec!["answers".to_string()],
            }
        })?;
        Self::new(score, importance_rating, confidence_rating)
    }

    pub fn stage(&self) -> MotivationStage {
        self.stage
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn importance_rating(&self) -> RulerRating {
        self.importance_rating
    }

    pub fn confidence_rating(&self) -> RulerRating {
        self.confidence_rating
    }

    /// Whether this patient should be steered toward active coaching.
    pub fn needs_intervention(&self) -> bool {
        self.stage.is_early()
            || self.importance_rating.value() < IMPORTANCE_OUTREACH_THRESHOLD
            || self.confidence_rating.value() < CONFIDENCE_OUTREACH_THRESHOLD
    }

    /// Label and blurb for the results screen's primary button.
    pub fn call_to_action(&self) -> CallToAction {
        if self.needs_intervention() {
            CallToAction {
                title: "Explore Your Readiness",
                subtitle: "Chat with our AI coach about your concerns and goals",
            }
        } else {
            CallToAction {
                title: "Continue Your Journey",
                subtitle: "Get personalized recommendations and support",
            }
        }
    }
}

/// Primary action offered on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Wire shape of a stored score, checked before it becomes a `MotivationScore`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredScore {
    stage: MotivationStage,
    score: f64,
    importance_rating: RulerRating,
    confidence_rating: RulerRating,
}

impl TryFrom<StoredScore> for MotivationScore {
    type Error = String;

    fn try_from(stored: StoredScore) -> Result<Self, Self::Error> {
        let score = MotivationScore::new(
            stored.score,
            stored.importance_rating,
            stored.confidence_rating,
        )
        .map_err(|e| e.to_string())?;
        if score.stage != stored.stage {
            return Err(format!(
                "stored stage '{}' does not match score {}",
                stored.stage, stored.score
            ));
        }
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rating(value: u8) -> RulerRating {
        RulerRating::try_new(value).unwrap()
    }

    fn answers(pairs: &[(&str, u8)]) -> AnswerSet {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    mod average {
        use super::*;

        #[test]
        fn empty_answer_set_has_no_average() {
            assert_eq!(ScoreCalculator::average(&AnswerSet::new()), None);
        }

        #[test]
        fn averages_all_values() {
            let set = answers(&[("change_intention", 2), ("timeline", 3)]);
            assert_eq!(ScoreCalculator::average(&set), Some(2.5));
        }
    }

    mod classify {
        use super::*;

        const JUST_ABOVE: f64 = 1e-9;

        #[test]
        fn precontemplation_up_to_one_and_a_half() {
            assert_eq!(StageClassifier::classify(1.0), Ok(MotivationStage::Precontemplation));
            assert_eq!(StageClassifier::classify(1.5), Ok(MotivationStage::Precontemplation));
        }

        #[test]
        fn boundary_1_5() {
            assert_eq!(
                StageClassifier::classify(1.5 + JUST_ABOVE),
                Ok(MotivationStage::Contemplation)
            );
        }

        #[test]
        fn boundary_2_5() {
            assert_eq!(StageClassifier::classify(2.5), Ok(MotivationStage::Contemplation));
            assert_eq!(
                StageClassifier::classify(2.5 + JUST_ABOVE),
                Ok(MotivationStage::Preparation)
            );
        }

        #[test]
        fn boundary_3_5() {
            assert_eq!(StageClassifier::classify(3.5), Ok(MotivationStage::Preparation));
            assert_eq!(
                StageClassifier::classify(3.5 + JUST_ABOVE),
                Ok(MotivationStage::Action)
            );
        }

        #[test]
        fn boundary_4_5() {
            assert_eq!(StageClassifier::classify(4.5), Ok(MotivationStage::Action));
            assert_eq!(
                StageClassifier::classify(4.5 + JUST_ABOVE),
                Ok(MotivationStage::Maintenance)
            );
            assert_eq!(StageClassifier::classify(5.0), Ok(MotivationStage::Maintenance));
        }

        #[test]
        fn rejects_scores_off_the_scale() {
            for bad in [-1.0, 0.0, 0.99, 5.01, f64::NAN, f64::INFINITY] {
                assert!(
                    matches!(
                        StageClassifier::classify(bad),
                        Err(AssessmentError::UnknownStage { .. })
                    ),
                    "expected {} to be rejected",
                    bad
                );
            }
        }

        #[test]
        fn two_answer_averages_land_on_both_sides_of_boundaries() {
            let cases = [
                (1, 2, MotivationStage::Precontemplation), // 1.5
                (2, 2, MotivationStage::Contemplation),    // 2.0
                (2, 3, MotivationStage::Contemplation),    // 2.5
                (3, 3, MotivationStage::Preparation),      // 3.0
                (3, 4, MotivationStage::Preparation),      // 3.5
                (4, 4, MotivationStage::Action),           // 4.0
                (4, 5, MotivationStage::Action),           // 4.5
                (5, 5, MotivationStage::Maintenance),      // 5.0
            ];
            for (a, b, expected) in cases {
                let set = answers(&[("change_intention", a), ("timeline", b)]);
                let score = MotivationScore::from_answers(&set, rating(8), rating(8)).unwrap();
                assert_eq!(score.stage(), expected, "answers {} and {}", a, b);
            }
        }
    }

    mod motivation_score {
        use super::*;

        #[test]
        fn contemplation_scenario_needs_intervention() {
            let set = answers(&[("change_intention", 2), ("timeline", 2)]);
            let score = MotivationScore::from_answers(&set, rating(5), rating(4)).unwrap();

            assert_eq!(score.score(), 2.0);
            assert_eq!(score.stage(), MotivationStage::Contemplation);
            assert!(score.needs_intervention());
        }

        #[test]
        fn maintenance_scenario_needs_no_intervention() {
            let set = answers(&[("change_intention", 5), ("timeline", 5)]);
            let score = MotivationScore::from_answers(&set, rating(9), rating(8)).unwrap();

            assert_eq!(score.score(), 5.0);
            assert_eq!(score.stage(), MotivationStage::Maintenance);
            assert!(!score.needs_intervention());
        }

        #[test]
        fn low_importance_alone_triggers_intervention() {
            let score = MotivationScore::new(4.0, rating(6), rating(9)).unwrap();
            assert!(score.needs_intervention());
        }

        #[test]
        fn low_confidence_alone_triggers_intervention() {
            let score = MotivationScore::new(4.0, rating(9), rating(5)).unwrap();
            assert!(score.needs_intervention());
        }

        #[test]
        fn thresholds_are_exclusive() {
            let score = MotivationScore::new(3.0, rating(7), rating(6)).unwrap();
            assert!(!score.needs_intervention());
        }

        #[test]
        fn call_to_action_follows_intervention() {
            let early = MotivationScore::new(1.0, rating(9), rating(9)).unwrap();
            assert_eq!(early.call_to_action().title, "Explore Your Readiness");
            let ready = MotivationScore::new(4.0, rating(9), rating(9)).unwrap();
            assert_eq!(ready.call_to_action().title, "Continue Your Journey");
        }

        #[test]
        fn empty_answers_are_incomplete() {
            let result = MotivationScore::from_answers(&AnswerSet::new(), rating(5), rating(5));
            assert!(matches!(
                result,
                Err(AssessmentError::IncompleteAssessment { .. })
            ));
        }

        #[test]
        fn serializes_with_camel_case_fields() {
            let score = MotivationScore::new(2.0, rating(5), rating(4)).unwrap();
            let json = serde_json::to_value(&score).unwrap();
            assert_eq!(json["stage"], "contemplation");
            assert_eq!(json["score"], 2.0);
            assert_eq!(json["importanceRating"], 5);
            assert_eq!(json["confidenceRating"], 4);
        }

        #[test]
        fn round_trips_through_json() {
            let score = MotivationScore::new(3.5, rating(7), rating(6)).unwrap();
            let json = serde_json::to_string(&score).unwrap();
            let back: MotivationScore = serde_json::from_str(&json).unwrap();
            assert_eq!(back, score);
        }

        #[test]
        fn rejects_record_whose_stage_disagrees_with_score() {
            let json = r#"{"stage":"maintenance","score":2.0,"importanceRating":5,"confidenceRating":4}"#;
            let result: Result<MotivationScore, _> = serde_json::from_str(json);
            assert!(result.is_err());
        }
    }

    proptest! {
        #[test]
        fn uniform_answers_score_their_value(v in 1u8..=5, n in 1usize..6) {
            let set: AnswerSet = (0..n).map(|i| (format!("q{}", i), v)).collect();
            let score = MotivationScore::from_answers(&set, rating(5), rating(5)).unwrap();
            prop_assert_eq!(score.score(), f64::from(v));
        }

        #[test]
        fn stage_never_decreases_as_score_grows(a in 1.0f64..=5.0, b in 1.0f64..=5.0) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let low_stage = StageClassifier::classify(low).unwrap();
            let high_stage = StageClassifier::classify(high).unwrap();
            prop_assert!(low_stage <= high_stage);
        }

        #[test]
        fn any_valid_answer_set_classifies(values in proptest::collection::vec(1u8..=5, 1..8)) {
            let set: AnswerSet = values
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("q{}", i), *v))
                .collect();
            prop_assert!(MotivationScore::from_answers(&set, rating(5), rating(5)).is_ok());
        }
    }
}
