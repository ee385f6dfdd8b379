//! Translation pipeline configuration.

use domain::Language;
use serde::{Deserialize, Serialize};

/// Target languages for the translation services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Languages every inbound message is translated into.
    /// Order matters for the text prompt wording.
    #[serde(default = "default_targets")]
    pub targets: Vec<Language>,
}

fn default_targets() -> Vec<Language> {
    vec![Language::Spanish, Language::English]
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            targets: default_targets(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_are_spanish_then_english() {
        let config = TranslationConfig::default();
        assert_eq!(config.targets, vec![Language::Spanish, Language::English]);
    }

    #[test]
    fn targets_deserialize_lowercase() {
        let config: TranslationConfig =
            serde_json::from_str(r#"{"targets":["english"]}"#).unwrap();
        assert_eq!(config.targets, vec![Language::English]);
    }
}
