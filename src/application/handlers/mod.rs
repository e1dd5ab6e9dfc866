//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;
pub mod coaching;

pub use assessment::{
    CompleteAssessmentCommand, CompleteAssessmentHandler, CompleteAssessmentResult,
    LoadAssessmentHandler, LoadAssessmentQuery,
};
pub use coaching::{
    apology, AskAssistantCommand, AskAssistantHandler, AskAssistantResult,
    SendCoachingMessageCommand, SendCoachingMessageHandler, SendCoachingMessageResult,
};
