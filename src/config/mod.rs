//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `READINESS_COACH` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use readiness_coach::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Coaching on behalf of {}", config.coach.physician_name);
//! ```

mod chat;
mod coach;
mod error;
mod logging;
mod storage;

pub use chat::ChatConfig;
pub use coach::CoachConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Coaching chat configuration (physician name, typing delay, seed)
    #[serde(default)]
    pub coach: CoachConfig,

    /// External chat backend configuration
    #[serde(default)]
    pub chat: ChatConfig,

    /// Assessment storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `READINESS_COACH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `READINESS_COACH__COACH__PHYSICIAN_NAME=Dr. Patel` -> `coach.physician_name`
    /// - `READINESS_COACH__STORAGE__BACKEND=file` -> `storage.backend`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("READINESS_COACH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.coach.validate()?;
        self.chat.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}
