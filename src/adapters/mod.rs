//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `assessment` - Assessment stores (in-memory, file)
//! - `chat` - External chat backend clients (HTTP, mock)

pub mod assessment;
pub mod chat;

pub use assessment::{FileAssessmentStore, InMemoryAssessmentStore};
pub use chat::{HttpChatClient, HttpChatConfig, MockChatClient};
