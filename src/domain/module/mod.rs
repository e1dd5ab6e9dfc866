//! Motivation module: the three-screen flow tying assessment to coaching.

mod aggregate;
mod errors;
mod stage;
mod state;

pub use aggregate::MotivationModule;
pub use errors::ModuleError;
pub use stage::ModuleStage;
pub use state::{ModuleEvent, ModuleState};
