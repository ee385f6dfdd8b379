//! Port definitions
//!
//! Traits the adapter crates implement: LLM inference, audio transcription,
//! and the messaging gateway.

pub mod inference_port;
pub mod messenger_port;
pub mod speech_port;

pub use inference_port::{InferencePort, InferenceResult};
pub use messenger_port::MessengerPort;
pub use speech_port::{SpeechPort, TranscriptionResult};

#[cfg(test)]
pub use inference_port::MockInferencePort;
#[cfg(test)]
pub use messenger_port::MockMessengerPort;
#[cfg(test)]
pub use speech_port::MockSpeechPort;
