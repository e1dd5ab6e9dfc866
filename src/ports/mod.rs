//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentStore` - Persists a patient's latest MotivationScore
//! - `ChatCompletionClient` - External free-form chat backend

mod assessment_store;
mod chat_completion;

pub use assessment_store::{storage_key, AssessmentStore, StoreError, STORAGE_KEY_PREFIX};
pub use chat_completion::{
    ChatCompletion, ChatCompletionClient, ChatCompletionError, ChatCompletionRequest,
};
