//! Coaching chat command handlers.

mod ask_assistant;
mod send_coaching_message;

pub use ask_assistant::{apology, AskAssistantCommand, AskAssistantHandler, AskAssistantResult};
pub use send_coaching_message::{
    SendCoachingMessageCommand, SendCoachingMessageHandler, SendCoachingMessageResult,
};
