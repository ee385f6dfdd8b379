//! Chat identifier value object
//!
//! WhatsApp chat ids as delivered by WAHA: `<number>@c.us` for direct chats,
//! `<number>@g.us` for groups, and `status@broadcast` for status updates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Marker suffix for group chats
const GROUP_MARKER: &str = "@g.us";

/// Marker for status broadcast pseudo-chats
const STATUS_BROADCAST: &str = "status@broadcast";

/// A validated chat identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(String);

impl ChatId {
    /// Create a chat id, rejecting empty input
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::InvalidChatId("<empty>".to_string()));
        }
        Ok(Self(raw))
    }

    /// The raw identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this chat is a group chat
    pub fn is_group(&self) -> bool {
        self.0.contains(GROUP_MARKER)
    }

    /// Whether this chat is the status broadcast channel
    pub fn is_status_broadcast(&self) -> bool {
        self.0.contains(STATUS_BROADCAST)
    }

    /// Group and broadcast traffic is never answered
    pub fn is_ignored(&self) -> bool {
        self.is_group() || self.is_status_broadcast()
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
