//! Application-level errors
//!
//! All external-call failures surface here as one categorized type; the HTTP
//! boundary decides the response status exactly once.

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// LLM inference failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// Audio transcription failed
    #[error("Transcription error: {0}")]
    Transcription(String),

    /// Messaging gateway call failed
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the failure came from an upstream service rather than the
    /// request itself
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Inference(_) | Self::Transcription(_) | Self::Gateway(_)
        )
    }
}
