//! Domain entities

pub mod inbound_message;
pub mod translation;

pub use inbound_message::{InboundMessage, MediaDescriptor, MessageRoute};
pub use translation::{AudioTranslation, TranslationReply};
