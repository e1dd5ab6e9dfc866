//! SendCoachingMessageHandler - Command handler for one chat turn.
//!
//! Waits out a simulated typing delay, then lets the module append the
//! patient's message and the coach's reply.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::coaching::{ChatMessage, CoachingError, TypingDelay};
use crate::domain::module::{ModuleError, ModuleStage, MotivationModule};

/// Command carrying the patient's chat input.
#[derive(Debug, Clone)]
pub struct SendCoachingMessageCommand {
    pub text: String,
}

/// Result of one chat turn.
#[derive(Debug, Clone)]
pub struct SendCoachingMessageResult {
    pub reply: ChatMessage,
    /// How long the coach "typed" before replying.
    pub delay: Duration,
}

/// Handler for coaching chat turns.
pub struct SendCoachingMessageHandler {
    delay: TypingDelay,
    rng: Mutex<StdRng>,
}

impl SendCoachingMessageHandler {
    pub fn new(delay: TypingDelay) -> Self {
        Self::with_rng(delay, StdRng::from_entropy())
    }

    /// Handler whose delays come from `rng`; reply selection is unaffected.
    pub fn with_rng(delay: TypingDelay, rng: StdRng) -> Self {
        Self {
            delay,
            rng: Mutex::new(rng),
        }
    }

    pub async fn handle<R: Rng>(
        &self,
        module: &mut MotivationModule<R>,
        cmd: SendCoachingMessageCommand,
    ) -> Result<SendCoachingMessageResult, ModuleError> {
        // Reject before pausing so bad input fails fast
        if module.stage() != ModuleStage::Chat {
            return Err(ModuleError::invalid_transition(module.stage(), "send_message"));
        }
        if cmd.text.trim().is_empty() {
            return Err(CoachingError::EmptyUtterance.into());
        }

        let delay = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            self.delay.sample(&mut *rng)
        };
        if !delay.is_zero() {
            sleep(delay).await;
        }

        let reply = module.send_message(&cmd.text)?;
        Ok(SendCoachingMessageResult { reply, delay })
    }
}
