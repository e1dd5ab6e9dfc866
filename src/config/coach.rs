//! Coaching chat configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::coaching::TypingDelay;

/// Coaching chat configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CoachConfig {
    /// Name the coach introduces itself on behalf of
    #[serde(default = "default_physician_name")]
    pub physician_name: String,

    /// Whether the coach pauses before replying
    #[serde(default = "default_typing_delay_enabled")]
    pub typing_delay_enabled: bool,

    #[serde(default = "default_typing_delay_min_ms")]
    pub typing_delay_min_ms: u64,

    #[serde(default = "default_typing_delay_max_ms")]
    pub typing_delay_max_ms: u64,

    /// Fixed seed for reply selection; entropy when unset
    pub rng_seed: Option<u64>,
}

impl CoachConfig {
    /// Typing delay described by this config.
    pub fn typing_delay(&self) -> Result<TypingDelay, ValidationError> {
        if !self.typing_delay_enabled {
            return Ok(TypingDelay::none());
        }
        TypingDelay::new(self.typing_delay_min_ms, self.typing_delay_max_ms)
            .map_err(|_| ValidationError::InvalidTypingDelay)
    }

    /// Validate coach configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.physician_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("coach.physician_name"));
        }
        self.typing_delay()?;
        Ok(())
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            physician_name: default_physician_name(),
            typing_delay_enabled: default_typing_delay_enabled(),
            typing_delay_min_ms: default_typing_delay_min_ms(),
            typing_delay_max_ms: default_typing_delay_max_ms(),
            rng_seed: None,
        }
    }
}

fn default_physician_name() -> String {
    "Dr. Smith".to_string()
}

fn default_typing_delay_enabled() -> bool {
    true
}

fn default_typing_delay_min_ms() -> u64 {
    TypingDelay::DEFAULT_MIN_MS
}

fn default_typing_delay_max_ms() -> u64 {
    TypingDelay::DEFAULT_MAX_MS
}
