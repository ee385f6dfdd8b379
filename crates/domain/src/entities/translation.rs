//! Translation output formats
//!
//! The reply sent back to the chat is a plain labeled block per language.
//! Labels are Portuguese because the bot's audience is Brazilian; they match
//! the established output users already know.

use serde::{Deserialize, Serialize};

use crate::value_objects::Language;

/// Reply produced by the single-call text translation flow.
///
/// The model is asked to emit the labeled blocks itself; its output is kept
/// verbatim and never validated against the requested format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationReply {
    /// Text the user sent
    pub source_text: String,
    /// Languages the model was asked for
    pub targets: Vec<Language>,
    /// Model output, passed through verbatim
    pub content: String,
}

impl TranslationReply {
    /// The message text to send back to the chat
    pub fn as_message(&self) -> &str {
        &self.content
    }
}

/// Result of the audio pipeline: transcript plus one translation per target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioTranslation {
    /// Transcript of the audio
    pub transcript: String,
    /// Translations in pipeline order
    pub translations: Vec<(Language, String)>,
}

impl AudioTranslation {
    /// Render the annotated three-segment reply:
    ///
    /// ```text
    /// Texto original: <transcript>
    /// Tradução para inglês: <en>
    /// Tradução para espanhol: <es>
    /// ```
    pub fn render(&self) -> String {
        let mut out = format!("Texto original: {}", self.transcript);
        for (language, text) in &self.translations {
            out.push('\n');
            out.push_str(&format!("Tradução para {}: {}", language.label_pt(), text));
        }
        out
    }
}
