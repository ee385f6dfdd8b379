//! Message routing service
//!
//! Drives one inbound event through classification and, for answerable
//! messages, the gateway conversation: typing start, model call(s), send,
//! typing stop. Strictly sequential; one inbound event produces at most one
//! outbound reply.

use std::sync::Arc;

use domain::{ChatId, InboundMessage, MessageRoute};
use tracing::{info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::MessengerPort,
    services::{TranslationService, VoiceTranslationService},
};

/// Acknowledgment for group/broadcast traffic
pub const IGNORED_NOTICE: &str = "Mensagem de grupo ou transmissão ignorada.";

/// Fixed diagnostic for events with neither text nor usable audio
pub const UNPROCESSABLE_NOTICE: &str = "Mensagem não contém áudio ou texto processável.";

/// Notice sent to the chat when the audio pipeline fails
const AUDIO_FAILURE_NOTICE: &str =
    "Erro ao processar áudio. Tente novamente ou envie uma mensagem de texto.";

/// What handling an inbound event produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOutcome {
    /// Group/broadcast traffic; acknowledged, nothing sent
    Ignored,
    /// A reply was delivered to the chat
    Replied { text: String },
    /// Nothing processable; diagnostic returned to the webhook caller only
    Unprocessable { notice: String },
}

/// Routes inbound messages and talks to the gateway
pub struct MessageService {
    messenger: Arc<dyn MessengerPort>,
    translation: TranslationService,
    voice: VoiceTranslationService,
}

impl MessageService {
    /// Create the routing service
    pub fn new(
        messenger: Arc<dyn MessengerPort>,
        translation: TranslationService,
        voice: VoiceTranslationService,
    ) -> Self {
        Self {
            messenger,
            translation,
            voice,
        }
    }

    /// Handle one inbound event end to end
    #[instrument(skip(self, message), fields(event_id = %message.id, chat = %message.chat_id))]
    pub async fn handle(
        &self,
        message: &InboundMessage,
    ) -> Result<MessageOutcome, ApplicationError> {
        match message.route() {
            MessageRoute::Ignored => {
                info!("Ignoring group or broadcast message");
                Ok(MessageOutcome::Ignored)
            }
            MessageRoute::Unprocessable => {
                info!("Message has no processable content");
                Ok(MessageOutcome::Unprocessable {
                    notice: UNPROCESSABLE_NOTICE.to_string(),
                })
            }
            MessageRoute::Text { body } => {
                self.reply_with(&message.chat_id, async {
                    let reply = self.translation.translate(&body).await?;
                    Ok(reply.content)
                })
                .await
            }
            MessageRoute::Audio { url } => {
                let outcome = self
                    .reply_with(&message.chat_id, async {
                        let result = self.voice.process(&url).await?;
                        Ok(result.render())
                    })
                    .await;

                if let Err(e) = &outcome {
                    if matches!(
                        e,
                        ApplicationError::Transcription(_) | ApplicationError::Inference(_)
                    ) {
                        // Best-effort notice so the user is not left waiting
                        if let Err(send_err) = self
                            .messenger
                            .send_text(&message.chat_id, AUDIO_FAILURE_NOTICE)
                            .await
                        {
                            warn!(error = %send_err, "Failed to deliver audio failure notice");
                        }
                    }
                }

                outcome
            }
        }
    }

    /// Wrap a reply computation in the typing indicator and deliver the text.
    ///
    /// Typing indicator failures are logged and swallowed; a failed send is a
    /// real failure because the reply is the point of the exchange.
    async fn reply_with(
        &self,
        chat_id: &ChatId,
        produce: impl Future<Output = Result<String, ApplicationError>>,
    ) -> Result<MessageOutcome, ApplicationError> {
        if let Err(e) = self.messenger.start_typing(chat_id).await {
            warn!(error = %e, "Failed to start typing indicator");
        }

        let result = produce.await;

        let outcome = match result {
            Ok(text) => {
                self.messenger.send_text(chat_id, &text).await?;
                info!(reply_len = text.len(), "Reply delivered");
                Ok(MessageOutcome::Replied { text })
            }
            Err(e) => Err(e),
        };

        if let Err(e) = self.messenger.stop_typing(chat_id).await {
            warn!(error = %e, "Failed to stop typing indicator");
        }

        outcome
    }
}
