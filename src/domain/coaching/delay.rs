//! Simulated typing latency before the coach replies.

use rand::Rng;
use std::time::Duration;

use super::CoachingError;

/// Bounded random pause shown as "coach is typing".
///
/// Purely presentational: it is sampled from its own RNG and never
/// influences which reply is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingDelay {
    min_ms: u64,
    max_ms: u64,
}

impl TypingDelay {
    pub const DEFAULT_MIN_MS: u64 = 1000;
    pub const DEFAULT_MAX_MS: u64 = 3000;

    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self, CoachingError> {
        if min_ms > max_ms {
            return Err(CoachingError::InvalidDelayBounds { min_ms, max_ms });
        }
        Ok(Self { min_ms, max_ms })
    }

    /// No pause at all.
    pub fn none() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }

    pub fn is_none(&self) -> bool {
        self.max_ms == 0
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.min_ms == self.max_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rng.gen_range(self.min_ms..=self.max_ms))
    }
}

impl Default for TypingDelay {
    fn default() -> Self {
        Self {
            min_ms: Self::DEFAULT_MIN_MS,
            max_ms: Self::DEFAULT_MAX_MS,
        }
    }
}
