//! Speech port - Interface for audio transcription

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of a transcription operation
#[derive(Debug, Clone)]
pub struct TranscriptionResult {
    /// Transcribed text
    pub text: String,
    /// Detected language code (e.g., "pt", "en"), when the model reports one
    pub detected_language: Option<String>,
    /// Duration of the audio in milliseconds, when known
    pub duration_ms: Option<u64>,
}

/// Port for speech-to-text operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Transcribe the audio found at a gateway-served URL
    async fn transcribe_url(&self, url: &str) -> Result<TranscriptionResult, ApplicationError>;

    /// Check if the transcription service is available
    async fn is_available(&self) -> bool;

    /// Get the name of the transcription model
    fn model_name(&self) -> String;
}
