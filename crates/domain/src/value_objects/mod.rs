//! Value objects

pub mod chat_id;
pub mod language;

pub use chat_id::ChatId;
pub use language::Language;
