//! Speech-to-text for voice messages
//!
//! Downloads gateway-served audio and transcribes it through the Groq-hosted
//! Whisper API (OpenAI-compatible `/audio/transcriptions`). Implements the
//! application `SpeechPort`.

pub mod config;
pub mod error;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use providers::WhisperClient;
pub use types::{AudioFormat, Transcription};
