//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the readiness coach domain.

mod errors;
mod ids;
mod percentage;
mod rating;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{MessageId, PatientName, UserId};
pub use percentage::Percentage;
pub use rating::{RulerLevel, RulerRating};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
