//! HTTP Chat Client - posts user input to the external chat backend.
//!
//! # Wire format
//!
//! `POST {base_url}/api/chat` with `{"user_id": ..., "user_input": ...}`,
//! answered by `{"response": ...}`.

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::warn;

use crate::domain::foundation::UserId;
use crate::ports::{ChatCompletion, ChatCompletionClient, ChatCompletionError, ChatCompletionRequest};

/// Configuration for the chat backend client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpChatConfig {
    /// Backend root, without trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpChatConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for HttpChatConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}

/// reqwest-backed chat backend client.
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    config: HttpChatConfig,
    client: Client,
}

impl HttpChatClient {
    pub fn new(config: HttpChatConfig) -> Result<Self, ChatCompletionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ChatCompletionError::InvalidRequest(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Builds the chat endpoint URL.
    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.config.base_url)
    }

    fn map_send_error(&self, e: reqwest::Error) -> ChatCompletionError {
        if e.is_timeout() {
            ChatCompletionError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            ChatCompletionError::network(format!("Connection failed: {}", e))
        } else {
            ChatCompletionError::network(e.to_string())
        }
    }

    /// Rejects non-success statuses.
    fn check_status(response: Response) -> Result<Response, ChatCompletionError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ChatCompletionError::Status {
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl ChatCompletionClient for HttpChatClient {
    async fn complete(
        &self,
        user_id: &UserId,
        user_input: &str,
    ) -> Result<ChatCompletion, ChatCompletionError> {
        let request = ChatCompletionRequest::new(user_id, user_input);

        let response = self
            .client
            .post(self.chat_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))
            .and_then(Self::check_status)
            .map_err(|e| {
                warn!(error = %e, url = %self.chat_url(), "chat backend request failed");
                e
            })?;

        response
            .json::<ChatCompletion>()
            .await
            .map_err(|e| ChatCompletionError::parse(format!("Failed to parse response: {}", e)))
    }
}
