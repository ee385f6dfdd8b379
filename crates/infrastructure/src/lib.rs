//! Infrastructure layer - configuration and process-level wiring
//!
//! Assembles the adapter configurations into one application config and owns
//! logging setup.

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, Environment, ServerConfig, TranslationConfig};
pub use telemetry::init_logging;
