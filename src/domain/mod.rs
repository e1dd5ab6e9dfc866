//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, state machine trait)
//! - `assessment` - Questionnaire, scoring and stage classification
//! - `coaching` - Scripted coaching replies, chat messages and transcript
//! - `module` - Assessment → results → chat screen flow

pub mod assessment;
pub mod coaching;
pub mod foundation;
pub mod module;
