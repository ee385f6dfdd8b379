//! Application services

pub mod message_service;
pub mod translation_service;
pub mod voice_translation_service;

pub use message_service::{IGNORED_NOTICE, MessageOutcome, MessageService, UNPROCESSABLE_NOTICE};
pub use translation_service::TranslationService;
pub use voice_translation_service::VoiceTranslationService;
