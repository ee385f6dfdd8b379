//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid chat identifier
    #[error("Invalid chat id: {0}")]
    InvalidChatId(String),

    /// Unknown target language code
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}
