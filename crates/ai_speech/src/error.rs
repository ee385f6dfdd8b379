//! Speech processing errors

use thiserror::Error;

/// Errors that can occur during speech processing
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Downloading the audio from the gateway failed
    #[error("Audio download failed: {0}")]
    DownloadFailed(String),

    /// The audio payload is unusable
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    /// Transcription request failed
    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// HTTP transport error
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Missing configuration
    #[error("Missing configuration: {0}")]
    Configuration(String),
}
