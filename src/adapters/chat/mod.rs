//! Chat Backend Adapters.
//!
//! Implementations of the ChatCompletionClient port.
//!
//! - `HttpChatClient` - reqwest client for the `/api/chat` endpoint
//! - `MockChatClient` - Configurable mock for testing

mod http_chat_client;
mod mock_chat_client;

pub use http_chat_client::{HttpChatClient, HttpChatConfig};
pub use mock_chat_client::MockChatClient;
