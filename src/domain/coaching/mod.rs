//! Coaching chat domain module.
//!
//! Scripted motivational-interviewing replies keyed on the patient's stage,
//! plus the message and transcript types the chat view renders.

mod delay;
mod engine;
mod errors;
mod message;
mod scripts;
mod transcript;

pub use delay::TypingDelay;
pub use engine::{DialogueEngine, Reply, ReplyRule};
pub use errors::CoachingError;
pub use message::{ChatMessage, MessageType, Sender};
pub use scripts::{
    opening_message, script_for_label, script_for_stage, StageScript, ANXIETY_MARKERS,
    ANXIETY_REPLY, FAMILY_MARKERS, FAMILY_REPLY, NEGATION_MARKERS, READINESS_MARKERS,
    READINESS_REPLY,
};
pub use transcript::ChatTranscript;
