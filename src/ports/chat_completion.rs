//! Chat Completion Port - Interface for the external free-form chat backend.
//!
//! The backend receives a user id and the raw user text and answers with a
//! single response string. Nothing here touches the in-core assessment.
//!
//! # Example
//!
//! ```ignore
//! let completion = client.complete(&user_id, "How do I start?").await?;
//! println!("{}", completion.response);
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Body sent to the chat backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub user_id: String,
    pub user_input: String,
}

impl ChatCompletionRequest {
    pub fn new(user_id: &UserId, user_input: impl Into<String>) -> Self {
        Self {
            user_id: user_id.as_str().to_string(),
            user_input: user_input.into(),
        }
    }
}

/// Body returned by the chat backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletion {
    pub response: String,
}

/// Port for the external chat backend.
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    /// Sends one user utterance and returns the backend's reply.
    async fn complete(
        &self,
        user_id: &UserId,
        user_input: &str,
    ) -> Result<ChatCompletion, ChatCompletionError>;
}

/// Errors from the chat backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatCompletionError {
    /// Backend answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// Request did not complete in time.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse backend response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Client could not be built or the request was malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ChatCompletionError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

impl From<ChatCompletionError> for DomainError {
    fn from(err: ChatCompletionError) -> Self {
        DomainError::new(ErrorCode::ChatServiceError, err.to_string())
    }
}
