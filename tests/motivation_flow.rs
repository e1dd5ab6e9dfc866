//! Integration tests for the assessment → results → chat flow.
//!
//! These tests drive the public API end to end:
//! 1. Answer the questionnaire and complete it through the handler
//! 2. Persist and reload the score through a store adapter
//! 3. Open the coaching chat and exchange messages
//! 4. Retake, which must discard score, answers and transcript
//!
//! Uses in-memory and temp-dir adapters to run without external services.

use std::sync::Arc;

use proptest::prelude::*;
use rand::rngs::mock::StepRng;
use rand::Rng;
use tempfile::TempDir;

use readiness_coach::adapters::{FileAssessmentStore, InMemoryAssessmentStore, MockChatClient};
use readiness_coach::application::{
    AskAssistantCommand, AskAssistantHandler, CompleteAssessmentCommand,
    CompleteAssessmentHandler, LoadAssessmentHandler, LoadAssessmentQuery,
    SendCoachingMessageCommand, SendCoachingMessageHandler,
};
use readiness_coach::domain::assessment::{
    AssessmentPhase, MotivationScore, MotivationStage, QuestionBank, StageClassifier,
};
use readiness_coach::domain::coaching::{
    DialogueEngine, MessageType, Sender, TypingDelay, ANXIETY_REPLY,
};
use readiness_coach::domain::foundation::{PatientName, UserId};
use readiness_coach::domain::module::{ModuleStage, MotivationModule};
use readiness_coach::ports::{AssessmentStore, ChatCompletionError};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn patient() -> PatientName {
    PatientName::new("Maria").unwrap()
}

fn new_module() -> MotivationModule {
    MotivationModule::new(QuestionBank::standard(), "Dr. Smith", DialogueEngine::seeded(17))
}

/// Walks the questionnaire the way the UI does: answer, advance, rulers.
fn answer_all<R: Rng>(
    module: &mut MotivationModule<R>,
    change_intention: u8,
    timeline: u8,
    importance: u8,
    confidence: u8,
) {
    let session = module.session_mut().unwrap();
    session.answer_current(change_intention).unwrap();
    session.advance().unwrap();
    session.answer_current(timeline).unwrap();
    assert_eq!(session.advance().unwrap(), AssessmentPhase::Ratings);
    session.set_importance(importance).unwrap();
    session.set_confidence(confidence).unwrap();
}

async fn complete<R: Rng>(
    module: &mut MotivationModule<R>,
    store: Arc<dyn AssessmentStore>,
) -> MotivationScore {
    let handler = CompleteAssessmentHandler::new(store);
    let result = handler
        .handle(module, CompleteAssessmentCommand { patient: patient() })
        .await
        .unwrap();
    assert!(result.persisted);
    result.score
}

// =============================================================================
// Scoring scenarios
// =============================================================================

#[tokio::test]
async fn low_readiness_patient_needs_intervention() {
    let store = Arc::new(InMemoryAssessmentStore::new());
    let mut module = new_module();
    answer_all(&mut module, 2, 2, 5, 4);

    let score = complete(&mut module, store).await;

    assert_eq!(score.score(), 2.0);
    assert_eq!(score.stage(), MotivationStage::Contemplation);
    assert!(score.needs_intervention());
    assert_eq!(score.call_to_action().title, "Explore Your Readiness");
    assert_eq!(module.stage(), ModuleStage::Results);
}

#[tokio::test]
async fn ready_patient_is_in_maintenance() {
    let store = Arc::new(InMemoryAssessmentStore::new());
    let mut module = new_module();
    answer_all(&mut module, 5, 5, 9, 8);

    let score = complete(&mut module, store).await;

    assert_eq!(score.score(), 5.0);
    assert_eq!(score.stage(), MotivationStage::Maintenance);
    assert!(!score.needs_intervention());
    assert_eq!(score.call_to_action().title, "Continue Your Journey");
}

#[tokio::test]
async fn mixed_answers_land_on_boundary_bucket() {
    let store = Arc::new(InMemoryAssessmentStore::new());
    let mut module = new_module();
    answer_all(&mut module, 3, 4, 8, 8);

    let score = complete(&mut module, store).await;

    assert_eq!(score.score(), 3.5);
    assert_eq!(score.stage(), MotivationStage::Preparation);
}

// =============================================================================
// Persistence
// =============================================================================

#[tokio::test]
async fn saved_score_resumes_on_results_from_file_store() {
    let temp_dir = TempDir::new().unwrap();
    let store: Arc<dyn AssessmentStore> = Arc::new(FileAssessmentStore::new(temp_dir.path()));

    let mut module = new_module();
    answer_all(&mut module, 4, 4, 7, 6);
    let score = complete(&mut module, Arc::clone(&store)).await;

    let loaded = LoadAssessmentHandler::new(store)
        .handle(LoadAssessmentQuery { patient: patient() })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded, score);

    let resumed = MotivationModule::resume(
        QuestionBank::standard(),
        "Dr. Smith",
        DialogueEngine::seeded(1),
        loaded,
    );
    assert_eq!(resumed.stage(), ModuleStage::Results);
    assert_eq!(resumed.score().map(|s| s.stage()), Some(MotivationStage::Action));
}

#[tokio::test]
async fn stored_json_matches_browser_record_shape() {
    let store = Arc::new(InMemoryAssessmentStore::new());
    let mut module = new_module();
    answer_all(&mut module, 1, 2, 3, 4);
    complete(&mut module, store.clone()).await;

    let raw = store.raw(&patient()).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "stage": "precontemplation",
            "score": 1.5,
            "importanceRating": 3,
            "confidenceRating": 4
        })
    );
}

// =============================================================================
// Coaching chat
// =============================================================================

#[tokio::test]
async fn chat_turns_append_in_order() {
    let store = Arc::new(InMemoryAssessmentStore::new());
    let mut module = new_module();
    answer_all(&mut module, 1, 1, 2, 2);
    complete(&mut module, store).await;

    module.start_chat().unwrap();
    let chat = SendCoachingMessageHandler::new(TypingDelay::none());

    let first = chat
        .handle(&mut module, SendCoachingMessageCommand { text: "I don't think I'm ready".into() })
        .await
        .unwrap();
    assert_eq!(first.reply.message_type(), MessageType::Reflection);

    let second = chat
        .handle(&mut module, SendCoachingMessageCommand { text: "I'm scared of failing".into() })
        .await
        .unwrap();
    assert_eq!(second.reply.content(), ANXIETY_REPLY);

    let senders: Vec<Sender> = module
        .transcript()
        .unwrap()
        .iter()
        .map(|m| m.sender())
        .collect();
    assert_eq!(
        senders,
        vec![Sender::Bot, Sender::User, Sender::Bot, Sender::User, Sender::Bot]
    );
}

#[tokio::test]
async fn opening_uses_stage_script_and_physician() {
    let mut module = MotivationModule::new(
        QuestionBank::standard(),
        "Dr. Patel",
        DialogueEngine::new(StepRng::new(0, 0)),
    );
    answer_all(&mut module, 3, 3, 8, 8);
    module.complete_assessment().unwrap();

    let transcript = module.start_chat().unwrap();
    let opening = transcript.messages()[0].content();
    assert!(opening.starts_with(
        "Hello! I'm your diabetes prevention coach. Dr. Patel asked me to work with you on your health journey."
    ));
    assert!(opening.contains("ready to take some steps toward preventing diabetes"));

    let reply = module.send_message("tell me more").unwrap();
    assert_eq!(reply.content(), "What specific changes are you thinking about making?");
}

#[tokio::test]
async fn retake_from_chat_clears_everything() {
    let store = Arc::new(InMemoryAssessmentStore::new());
    let mut module = new_module();
    answer_all(&mut module, 2, 3, 6, 6);
    complete(&mut module, store.clone()).await;
    module.start_chat().unwrap();
    module.send_message("my family").unwrap();

    module.retake().unwrap();

    assert_eq!(module.stage(), ModuleStage::Assessment);
    assert!(module.score().is_none());
    assert!(module.transcript().is_none());
    let session = module.session().unwrap();
    assert!(session.answers().is_empty());
    assert_eq!(session.phase(), AssessmentPhase::Question(0));

    // The stored record is only replaced once a new assessment completes.
    assert!(store.exists(&patient()).await.unwrap());
}

// =============================================================================
// External assistant
// =============================================================================

#[tokio::test]
async fn assistant_failure_never_touches_module() {
    let store = Arc::new(InMemoryAssessmentStore::new());
    let mut module = new_module();
    answer_all(&mut module, 4, 5, 9, 9);
    let score = complete(&mut module, store).await;

    let client = MockChatClient::new().with_error(ChatCompletionError::network("refused"));
    let assistant = AskAssistantHandler::new(Arc::new(client));
    let result = assistant
        .handle(AskAssistantCommand {
            user_id: UserId::new("Maria").unwrap(),
            user_input: "What should I eat?".into(),
        })
        .await
        .unwrap();

    assert!(result.fallback);
    assert!(result.response.contains("network error: refused"));
    assert_eq!(module.score(), Some(&score));
    assert_eq!(module.stage(), ModuleStage::Results);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn uniform_answers_score_their_value(value in 1u8..=5, importance in 1u8..=10, confidence in 1u8..=10) {
        let mut module = new_module();
        answer_all(&mut module, value, value, importance, confidence);
        let score = module.complete_assessment().unwrap();

        prop_assert_eq!(score.score(), f64::from(value));
        prop_assert_eq!(score.stage(), StageClassifier::classify(f64::from(value)).unwrap());
        prop_assert_eq!(module.stage(), ModuleStage::Results);
    }

    #[test]
    fn retake_always_empties_the_module(a in 1u8..=5, b in 1u8..=5, chat in any::<bool>()) {
        let mut module = new_module();
        answer_all(&mut module, a, b, 5, 5);
        module.complete_assessment().unwrap();
        if chat {
            module.start_chat().unwrap();
        }

        module.retake().unwrap();

        prop_assert!(module.score().is_none());
        prop_assert!(module.session().unwrap().answers().is_empty());
    }
}
