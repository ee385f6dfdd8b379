//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `translation`: target languages for the translation pipeline
//!
//! Inference, speech, and gateway settings come from their adapter crates.

mod server;
mod translation;

use std::fmt;

use ai_core::InferenceConfig;
use ai_speech::SpeechConfig;
use integration_waha::WahaClientConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

pub use server::ServerConfig;
pub use translation::TranslationConfig;

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - relaxed validation
    #[default]
    Development,
    /// Production environment - strict validation
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Option<Environment>,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Inference (chat completion) configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Speech transcription configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// WAHA gateway configuration
    #[serde(default)]
    pub waha: WahaClientConfig,

    /// Translation targets
    #[serde(default)]
    pub translation: TranslationConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., TRADUZAP_SERVER__PORT)
            .add_source(Self::env_source());

        let config = builder.build()?;
        let config: Self = config.try_deserialize()?;

        info!(
            host = %config.server.host,
            port = %config.server.port,
            model = %config.inference.default_model,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Environment source with nested keys addressed by double underscore,
    /// so `TRADUZAP_INFERENCE__API_KEY` lands on `inference.api_key`.
    fn env_source() -> config::Environment {
        config::Environment::with_prefix("TRADUZAP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Validate that the configuration can actually serve traffic.
    ///
    /// Both API clients talk to the same provider, but each carries its own
    /// key so they can be split across accounts.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.inference.api_key.is_none() {
            return Err(config::ConfigError::Message(
                "inference.api_key is required (set TRADUZAP_INFERENCE__API_KEY)".to_string(),
            ));
        }
        if self.speech.api_key.is_none() {
            return Err(config::ConfigError::Message(
                "speech.api_key is required (set TRADUZAP_SPEECH__API_KEY)".to_string(),
            ));
        }
        if self.translation.targets.is_empty() {
            return Err(config::ConfigError::Message(
                "translation.targets must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
