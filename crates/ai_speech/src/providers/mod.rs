//! Speech provider implementations

pub mod whisper;

pub use whisper::WhisperClient;
