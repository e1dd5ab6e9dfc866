//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    // Assessment handlers
    CompleteAssessmentCommand, CompleteAssessmentHandler, CompleteAssessmentResult,
    LoadAssessmentHandler, LoadAssessmentQuery,
    // Coaching handlers
    AskAssistantCommand, AskAssistantHandler, AskAssistantResult,
    SendCoachingMessageCommand, SendCoachingMessageHandler, SendCoachingMessageResult,
};
