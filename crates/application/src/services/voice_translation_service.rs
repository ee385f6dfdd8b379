//! Audio pipeline: transcribe, then translate per target
//!
//! Three sequential external calls for the default target set: one
//! transcription and one translation call per language. The pipeline order is
//! fixed (English before Spanish); the configured target set only selects
//! which translations run.

use std::sync::Arc;

use domain::{AudioTranslation, Language};
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{InferencePort, SpeechPort},
};

/// Canonical order in which translations are produced
const PIPELINE_ORDER: [Language; 2] = [Language::English, Language::Spanish];

/// Transcribes audio at a gateway URL and translates the transcript
pub struct VoiceTranslationService {
    speech: Arc<dyn SpeechPort>,
    inference: Arc<dyn InferencePort>,
    targets: Vec<Language>,
}

impl VoiceTranslationService {
    /// Create a pipeline translating into the given targets
    pub fn new(
        speech: Arc<dyn SpeechPort>,
        inference: Arc<dyn InferencePort>,
        targets: Vec<Language>,
    ) -> Self {
        Self {
            speech,
            inference,
            targets,
        }
    }

    /// Run the full pipeline for the audio at `url`
    #[instrument(skip(self), fields(url = %url))]
    pub async fn process(&self, url: &str) -> Result<AudioTranslation, ApplicationError> {
        let transcription = self.speech.transcribe_url(url).await?;

        debug!(
            transcript_len = transcription.text.len(),
            language = transcription.detected_language.as_deref().unwrap_or("?"),
            "Audio transcribed"
        );

        let mut translations = Vec::with_capacity(self.targets.len());
        for language in PIPELINE_ORDER {
            if !self.targets.contains(&language) {
                continue;
            }
            let translated = self.translate_to(language, &transcription.text).await?;
            translations.push((language, translated));
        }

        Ok(AudioTranslation {
            transcript: transcription.text,
            translations,
        })
    }

    async fn translate_to(
        &self,
        language: Language,
        transcript: &str,
    ) -> Result<String, ApplicationError> {
        let system_prompt = format!(
            "Você é um tradutor de textos. Traduza o texto do usuário para \
             {}. Responda somente com a tradução.",
            language.label_pt()
        );

        let result = self
            .inference
            .generate_with_system(&system_prompt, transcript)
            .await?;

        Ok(result.content)
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use super::*;
    use crate::ports::{
        InferenceResult, MockInferencePort, MockSpeechPort, TranscriptionResult,
    };

    fn transcription(text: &str) -> TranscriptionResult {
        TranscriptionResult {
            text: text.to_string(),
            detected_language: Some("pt".to_string()),
            duration_ms: Some(4200),
        }
    }

    fn inference_result(content: &str) -> InferenceResult {
        InferenceResult {
            content: content.to_string(),
            model: "llama-3.1-70b-versatile".to_string(),
            tokens_used: None,
            latency_ms: 80,
        }
    }

    #[tokio::test]
    async fn pipeline_makes_three_calls_in_order() {
        let mut seq = Sequence::new();
        let mut speech = MockSpeechPort::new();
        let mut inference = MockInferencePort::new();

        speech
            .expect_transcribe_url()
            .withf(|url| url == "http://host/f.oga")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(transcription("bom dia")));

        inference
            .expect_generate_with_system()
            .withf(|system, message| system.contains("inglês") && message == "bom dia")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(inference_result("good morning")));

        inference
            .expect_generate_with_system()
            .withf(|system, message| system.contains("espanhol") && message == "bom dia")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(inference_result("buenos días")));

        let service = VoiceTranslationService::new(
            Arc::new(speech),
            Arc::new(inference),
            vec![Language::English, Language::Spanish],
        );

        let result = service.process("http://host/f.oga").await.unwrap();
        assert_eq!(result.transcript, "bom dia");
        assert_eq!(
            result.translations,
            vec![
                (Language::English, "good morning".to_string()),
                (Language::Spanish, "buenos días".to_string()),
            ]
        );
        assert_eq!(
            result.render(),
            "Texto original: bom dia\n\
             Tradução para inglês: good morning\n\
             Tradução para espanhol: buenos días"
        );
    }

    #[tokio::test]
    async fn english_runs_before_spanish_even_when_configured_backwards() {
        let mut seq = Sequence::new();
        let mut speech = MockSpeechPort::new();
        let mut inference = MockInferencePort::new();

        speech
            .expect_transcribe_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(transcription("oi")));

        inference
            .expect_generate_with_system()
            .withf(|system, _| system.contains("inglês"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(inference_result("hi")));

        inference
            .expect_generate_with_system()
            .withf(|system, _| system.contains("espanhol"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(inference_result("hola")));

        let service = VoiceTranslationService::new(
            Arc::new(speech),
            Arc::new(inference),
            vec![Language::Spanish, Language::English],
        );

        service.process("http://host/f.oga").await.unwrap();
    }

    #[tokio::test]
    async fn transcription_failure_skips_translation() {
        let mut speech = MockSpeechPort::new();
        let inference = MockInferencePort::new();

        speech
            .expect_transcribe_url()
            .times(1)
            .returning(|_| Err(ApplicationError::Transcription("bad audio".to_string())));

        let service = VoiceTranslationService::new(
            Arc::new(speech),
            Arc::new(inference),
            vec![Language::English, Language::Spanish],
        );

        let result = service.process("http://host/f.oga").await;
        assert!(matches!(result, Err(ApplicationError::Transcription(_))));
    }

    #[tokio::test]
    async fn translation_failure_aborts_pipeline() {
        let mut speech = MockSpeechPort::new();
        let mut inference = MockInferencePort::new();

        speech
            .expect_transcribe_url()
            .times(1)
            .returning(|_| Ok(transcription("oi")));

        inference
            .expect_generate_with_system()
            .times(1)
            .returning(|_, _| Err(ApplicationError::Inference("model down".to_string())));

        let service = VoiceTranslationService::new(
            Arc::new(speech),
            Arc::new(inference),
            vec![Language::English, Language::Spanish],
        );

        let result = service.process("http://host/f.oga").await;
        assert!(matches!(result, Err(ApplicationError::Inference(_))));
    }

    #[tokio::test]
    async fn single_target_makes_two_calls() {
        let mut speech = MockSpeechPort::new();
        let mut inference = MockInferencePort::new();

        speech
            .expect_transcribe_url()
            .times(1)
            .returning(|_| Ok(transcription("oi")));

        inference
            .expect_generate_with_system()
            .withf(|system, _| system.contains("inglês"))
            .times(1)
            .returning(|_, _| Ok(inference_result("hi")));

        let service = VoiceTranslationService::new(
            Arc::new(speech),
            Arc::new(inference),
            vec![Language::English],
        );

        let result = service.process("http://host/f.oga").await.unwrap();
        assert_eq!(result.translations.len(), 1);
    }
}
