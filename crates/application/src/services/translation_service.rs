//! Text translation invoker
//!
//! Wraps one LLM call behind a `translate(text)` contract. The model is asked
//! for one labeled block per configured target language; its output is passed
//! through verbatim, without validating that it followed the format.

use std::sync::Arc;

use domain::{Language, TranslationReply};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::InferencePort};

/// Translation invoker with a configurable target-language set
pub struct TranslationService {
    inference: Arc<dyn InferencePort>,
    targets: Vec<Language>,
}

impl TranslationService {
    /// Create a service translating into the given targets
    pub fn new(inference: Arc<dyn InferencePort>, targets: Vec<Language>) -> Self {
        Self { inference, targets }
    }

    /// The configured target languages
    pub fn targets(&self) -> &[Language] {
        &self.targets
    }

    /// Translate `text` into all configured targets with a single model call
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn translate(&self, text: &str) -> Result<TranslationReply, ApplicationError> {
        let system_prompt = self.system_prompt();
        let message = format!("<texto>{text}</texto>");

        let result = self
            .inference
            .generate_with_system(&system_prompt, &message)
            .await?;

        debug!(
            model = %result.model,
            latency_ms = result.latency_ms,
            "Translation completed"
        );

        Ok(TranslationReply {
            source_text: text.to_string(),
            targets: self.targets.clone(),
            content: result.content,
        })
    }

    fn system_prompt(&self) -> String {
        let idiomas = self
            .targets
            .iter()
            .map(|l| l.label_pt())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Você é um tradutor de textos. Traduza o texto dentro de <texto> \
             para os seguintes idiomas, nessa ordem: {idiomas}. Responda com um \
             bloco por idioma no formato 'Tradução para <idioma>: <tradução>', \
             separando os blocos com uma linha contendo apenas '---'. Não \
             adicione comentários."
        )
    }
}
