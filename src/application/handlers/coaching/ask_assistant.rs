//! AskAssistantHandler - Forwards free-form questions to the external chat backend.
//!
//! Backend failures never surface as errors: the patient sees an apology that
//! embeds the failure detail, and the assessment is untouched.

use std::sync::Arc;
use tracing::warn;

use crate::domain::coaching::CoachingError;
use crate::domain::foundation::UserId;
use crate::ports::ChatCompletionClient;

/// Command to ask the external assistant something.
#[derive(Debug, Clone)]
pub struct AskAssistantCommand {
    pub user_id: UserId,
    pub user_input: String,
}

/// Text to show the patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskAssistantResult {
    pub response: String,
    /// True when `response` is the apology rather than a backend answer.
    pub fallback: bool,
}

/// Handler for assistant questions.
pub struct AskAssistantHandler {
    client: Arc<dyn ChatCompletionClient>,
}

/// Apology shown when the backend call fails.
pub fn apology(detail: &str) -> String {
    format!(
        "I've encountered a brief disconnection from the strata. (Error: {}). Please try again shortly.",
        detail
    )
}

impl AskAssistantHandler {
    pub fn new(client: Arc<dyn ChatCompletionClient>) -> Self {
        Self { client }
    }

    pub async fn handle(&self, cmd: AskAssistantCommand) -> Result<AskAssistantResult, CoachingError> {
        let input = cmd.user_input.trim();
        if input.is_empty() {
            return Err(CoachingError::EmptyUtterance);
        }

        match self.client.complete(&cmd.user_id, input).await {
            Ok(completion) => Ok(AskAssistantResult {
                response: completion.response,
                fallback: false,
            }),
            Err(err) => {
                warn!(user_id = %cmd.user_id.as_str(), error = %err, "assistant unavailable");
                Ok(AskAssistantResult {
                    response: apology(&err.to_string()),
                    fallback: true,
                })
            }
        }
    }
}
