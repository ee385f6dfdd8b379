//! Types for speech processing

use serde::{Deserialize, Serialize};

/// Audio formats seen in WhatsApp voice and audio messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// Opus codec (WhatsApp voice notes, `audio/ogg; codecs=opus`)
    Opus,
    /// OGG container
    Ogg,
    /// MP3
    Mp3,
    /// WAV (uncompressed)
    Wav,
}

impl AudioFormat {
    /// MIME type for this format
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Opus => "audio/ogg; codecs=opus",
            Self::Ogg => "audio/ogg",
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
        }
    }

    /// File extension for this format
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Opus => "opus",
            Self::Ogg => "ogg",
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
        }
    }

    /// Parse a MIME type string, handling compound types like
    /// `audio/ogg; codecs=opus`. Unknown audio types default to Ogg,
    /// matching what WhatsApp voice notes actually are.
    #[must_use]
    pub fn from_mime_type(mime: &str) -> Self {
        let mime_lower = mime.to_lowercase();

        if mime_lower.contains("opus") {
            Self::Opus
        } else if mime_lower.contains("mp3") || mime_lower.contains("mpeg") {
            Self::Mp3
        } else if mime_lower.contains("wav") {
            Self::Wav
        } else {
            Self::Ogg
        }
    }
}

/// A completed transcription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcription {
    /// Transcribed text
    pub text: String,
    /// Detected language code, when the model reports one
    pub language: Option<String>,
    /// Audio duration in milliseconds, when known
    pub duration_ms: Option<u64>,
}

impl Transcription {
    /// Create a transcription with just text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
            duration_ms: None,
        }
    }

    /// Attach the detected language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Attach the audio duration
    #[must_use]
    pub const fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}
