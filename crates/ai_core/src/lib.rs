//! AI Core - LLM inference client
//!
//! Talks to the Groq cloud API, which exposes an OpenAI-compatible
//! chat-completions endpoint. Implements the application `InferencePort`.

pub mod config;
pub mod error;
pub mod groq;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use groq::GroqClient;
