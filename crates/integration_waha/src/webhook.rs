//! WAHA webhook event parsing
//!
//! WAHA posts one JSON event per message. Only the `payload` section matters
//! here; the envelope carries the event id and session name.

use domain::{DomainError, InboundMessage, MediaDescriptor};
use serde::Deserialize;

/// A webhook event as posted by WAHA
#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    /// Event id (`evt_...`)
    #[serde(default)]
    pub id: String,
    /// Event type, `message` for inbound messages
    #[serde(default)]
    pub event: String,
    /// Session the event belongs to
    #[serde(default = "default_session")]
    pub session: String,
    /// The message itself
    pub payload: WebhookPayload,
}

fn default_session() -> String {
    "default".to_string()
}

/// The message section of a webhook event
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    /// Message id assigned by the gateway
    #[serde(default)]
    pub id: String,
    /// Sender chat id
    pub from: String,
    /// Recipient chat id
    #[serde(default)]
    pub to: Option<String>,
    /// Whether the account itself sent this message
    #[serde(default, rename = "fromMe")]
    pub from_me: bool,
    /// Text body; empty for pure media messages
    #[serde(default)]
    pub body: String,
    /// Media-presence flag
    #[serde(default, rename = "hasMedia")]
    pub has_media: bool,
    /// Media descriptor, when media was attached
    #[serde(default)]
    pub media: Option<WebhookMedia>,
}

/// Media attachment as described by WAHA
#[derive(Debug, Deserialize)]
pub struct WebhookMedia {
    /// Download URL served by the gateway
    #[serde(default)]
    pub url: String,
    /// Original filename, often null
    #[serde(default)]
    pub filename: Option<String>,
    /// MIME type, e.g. `audio/ogg; codecs=opus`
    #[serde(default)]
    pub mimetype: String,
}

impl WebhookEvent {
    /// Convert the event into a domain message.
    ///
    /// Fails only when the sender chat id is empty.
    pub fn into_inbound_message(self) -> Result<InboundMessage, DomainError> {
        let chat_id = domain::ChatId::new(self.payload.from)?;

        let media = self.payload.media.map(|m| MediaDescriptor {
            url: m.url,
            filename: m.filename,
            mime_type: m.mimetype,
        });

        Ok(InboundMessage {
            id: self.payload.id,
            session: self.session,
            chat_id,
            body: self.payload.body,
            has_media: self.payload.has_media,
            media,
        })
    }
}
