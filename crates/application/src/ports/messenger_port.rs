//! Messenger port - Interface to the messaging gateway
//!
//! The gateway is an opaque collaborator: typing indicators and message
//! delivery are fire-and-confirm calls addressed by chat id.

use async_trait::async_trait;
use domain::ChatId;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for messaging gateway operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessengerPort: Send + Sync {
    /// Show the typing indicator in a chat
    async fn start_typing(&self, chat_id: &ChatId) -> Result<(), ApplicationError>;

    /// Clear the typing indicator in a chat
    async fn stop_typing(&self, chat_id: &ChatId) -> Result<(), ApplicationError>;

    /// Send a text message to a chat
    async fn send_text(&self, chat_id: &ChatId, text: &str) -> Result<(), ApplicationError>;

    /// Check if the gateway is reachable
    async fn is_available(&self) -> bool;
}
