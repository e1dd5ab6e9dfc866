//! Mock chat backend for testing.
//!
//! Queued responses are consumed in order; once the queue is empty every
//! call echoes a default reply. Calls are recorded for verification.
//!
//! # Example
//!
//! ```ignore
//! let client = MockChatClient::new()
//!     .with_response("Hello from the coach")
//!     .with_error(ChatCompletionError::Status { status: 503 });
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::foundation::UserId;
use crate::ports::{ChatCompletion, ChatCompletionClient, ChatCompletionError, ChatCompletionRequest};

/// Mock chat backend.
#[derive(Debug, Clone, Default)]
pub struct MockChatClient {
    responses: Arc<Mutex<VecDeque<Result<String, ChatCompletionError>>>>,
    calls: Arc<Mutex<Vec<ChatCompletionRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, response: impl Into<String>) -> Self {
        lock(&self.responses).push_back(Ok(response.into()));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: ChatCompletionError) -> Self {
        lock(&self.responses).push_back(Err(error));
        self
    }

    /// Returns the number of calls made.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<ChatCompletionRequest> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl ChatCompletionClient for MockChatClient {
    async fn complete(
        &self,
        user_id: &UserId,
        user_input: &str,
    ) -> Result<ChatCompletion, ChatCompletionError> {
        lock(&self.calls).push(ChatCompletionRequest::new(user_id, user_input));

        let next = lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Ok(format!("Mock response to: {}", user_input)));
        next.map(|response| ChatCompletion { response })
    }
}
