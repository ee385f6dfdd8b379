//! Inbound message entity and routing rules
//!
//! One `InboundMessage` is built per webhook event, classified once, and
//! discarded after the reply is sent. There is no persistence and no state
//! beyond the single request.

use serde::{Deserialize, Serialize};

use crate::value_objects::ChatId;

/// Attached media as described by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    /// Download URL served by the gateway
    pub url: String,
    /// Original filename, when the gateway knows it
    pub filename: Option<String>,
    /// MIME type string, e.g. `audio/ogg; codecs=opus`
    pub mime_type: String,
}

impl MediaDescriptor {
    /// Whether this media is audio (substring match on the MIME type)
    pub fn is_audio(&self) -> bool {
        self.mime_type.contains("audio")
    }
}

/// An inbound message event, immutable for the lifetime of one request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Event id assigned by the gateway
    pub id: String,
    /// Session the event belongs to
    pub session: String,
    /// Sender chat id
    pub chat_id: ChatId,
    /// Text body; empty for pure media messages
    pub body: String,
    /// Media-presence flag as reported by the gateway
    pub has_media: bool,
    /// Media descriptor, present only when media was attached
    pub media: Option<MediaDescriptor>,
}

/// Routing decision for an inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageRoute {
    /// Group or status-broadcast traffic; acknowledged but never answered
    Ignored,
    /// Audio media to transcribe and translate
    Audio { url: String },
    /// Plain text to translate
    Text { body: String },
    /// Neither usable text nor audio
    Unprocessable,
}

impl InboundMessage {
    /// Classify this message.
    ///
    /// The decision is pure and total over the message shape:
    /// 1. group/broadcast senders are ignored,
    /// 2. audio media (flag set, URL present, MIME contains "audio") routes
    ///    to the audio pipeline,
    /// 3. a non-empty body routes to text translation,
    /// 4. everything else is unprocessable.
    pub fn route(&self) -> MessageRoute {
        if self.chat_id.is_ignored() {
            return MessageRoute::Ignored;
        }

        if self.has_media {
            if let Some(media) = &self.media {
                if !media.url.is_empty() && media.is_audio() {
                    return MessageRoute::Audio {
                        url: media.url.clone(),
                    };
                }
            }
        }

        if !self.body.is_empty() {
            return MessageRoute::Text {
                body: self.body.clone(),
            };
        }

        MessageRoute::Unprocessable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_message(from: &str, body: &str) -> InboundMessage {
        InboundMessage {
            id: "evt_01".to_string(),
            session: "default".to_string(),
            chat_id: ChatId::new(from).unwrap(),
            body: body.to_string(),
            has_media: false,
            media: None,
        }
    }

    fn audio_message(mime: &str, url: &str) -> InboundMessage {
        InboundMessage {
            id: "evt_02".to_string(),
            session: "default".to_string(),
            chat_id: ChatId::new("17712179403@c.us").unwrap(),
            body: String::new(),
            has_media: true,
            media: Some(MediaDescriptor {
                url: url.to_string(),
                filename: None,
                mime_type: mime.to_string(),
            }),
        }
    }

    #[test]
    fn group_sender_is_ignored() {
        let msg = text_message("123@g.us", "hello");
        assert_eq!(msg.route(), MessageRoute::Ignored);
    }

    #[test]
    fn status_broadcast_is_ignored() {
        let msg = text_message("status@broadcast", "hello");
        assert_eq!(msg.route(), MessageRoute::Ignored);
    }

    #[test]
    fn ignore_wins_over_media() {
        let mut msg = audio_message("audio/ogg; codecs=opus", "http://host/f.oga");
        msg.chat_id = ChatId::new("123@g.us").unwrap();
        assert_eq!(msg.route(), MessageRoute::Ignored);
    }

    #[test]
    fn audio_media_routes_to_audio() {
        let msg = audio_message("audio/ogg; codecs=opus", "http://host/f.oga");
        assert_eq!(
            msg.route(),
            MessageRoute::Audio {
                url: "http://host/f.oga".to_string()
            }
        );
    }

    #[test]
    fn audio_wins_over_body() {
        let mut msg = audio_message("audio/ogg", "http://host/f.oga");
        msg.body = "caption".to_string();
        assert!(matches!(msg.route(), MessageRoute::Audio { .. }));
    }

    #[test]
    fn non_audio_media_with_body_routes_to_text() {
        let mut msg = audio_message("image/jpeg", "http://host/f.jpg");
        msg.body = "look at this".to_string();
        assert_eq!(
            msg.route(),
            MessageRoute::Text {
                body: "look at this".to_string()
            }
        );
    }

    #[test]
    fn media_flag_without_url_falls_through() {
        let mut msg = audio_message("audio/ogg", "");
        msg.body = String::new();
        assert_eq!(msg.route(), MessageRoute::Unprocessable);
    }

    #[test]
    fn media_flag_without_descriptor_falls_through() {
        let msg = InboundMessage {
            id: "evt_03".to_string(),
            session: "default".to_string(),
            chat_id: ChatId::new("1@c.us").unwrap(),
            body: String::new(),
            has_media: true,
            media: None,
        };
        assert_eq!(msg.route(), MessageRoute::Unprocessable);
    }

    #[test]
    fn plain_text_routes_to_text() {
        let msg = text_message("17712179403@c.us", "Olá, como você está?");
        assert_eq!(
            msg.route(),
            MessageRoute::Text {
                body: "Olá, como você está?".to_string()
            }
        );
    }

    #[test]
    fn empty_message_is_unprocessable() {
        let msg = text_message("17712179403@c.us", "");
        assert_eq!(msg.route(), MessageRoute::Unprocessable);
    }

    #[test]
    fn media_descriptor_audio_detection() {
        let audio = MediaDescriptor {
            url: "http://host/f.oga".to_string(),
            filename: Some("f.oga".to_string()),
            mime_type: "audio/ogg; codecs=opus".to_string(),
        };
        assert!(audio.is_audio());

        let image = MediaDescriptor {
            url: "http://host/f.jpg".to_string(),
            filename: None,
            mime_type: "image/jpeg".to_string(),
        };
        assert!(!image.is_audio());
    }
}
