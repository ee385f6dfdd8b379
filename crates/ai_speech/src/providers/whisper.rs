//! Whisper transcription over the OpenAI-compatible API
//!
//! The gateway serves inbound voice notes at a plain HTTP URL. The client
//! downloads the bytes and posts them as a multipart upload to
//! `/audio/transcriptions`.

use std::time::Duration;

use application::{ApplicationError, SpeechPort, TranscriptionResult};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{
    Client, StatusCode,
    multipart::{Form, Part},
};
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    config::SpeechConfig,
    error::SpeechError,
    types::{AudioFormat, Transcription},
};

/// Whisper transcription client
#[derive(Debug, Clone)]
pub struct WhisperClient {
    client: Client,
    config: SpeechConfig,
}

/// Whisper transcription response (`verbose_json` adds language/duration)
#[derive(Debug, Deserialize)]
struct WhisperResponse {
    text: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
}

/// API error body, when the server sends one
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl WhisperClient {
    /// Create a new client; the API key is required
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        if config.api_key.is_none() {
            return Err(SpeechError::Configuration(
                "api_key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            "Initialized Whisper transcription client"
        );

        Ok(Self { client, config })
    }

    fn api_key(&self) -> &str {
        self.config
            .api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .unwrap_or_default()
    }

    fn transcriptions_url(&self) -> String {
        format!(
            "{}/audio/transcriptions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Fetch the audio bytes served by the gateway
    #[instrument(skip(self))]
    pub async fn download_audio(&self, url: &str) -> Result<(Bytes, AudioFormat), SpeechError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::DownloadFailed(format!(
                "HTTP {status} fetching {url}"
            )));
        }

        let format = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map_or(AudioFormat::Ogg, AudioFormat::from_mime_type);

        let data = response.bytes().await?;

        if data.is_empty() {
            return Err(SpeechError::InvalidAudio("audio data is empty".to_string()));
        }
        if data.len() > self.config.max_audio_bytes {
            return Err(SpeechError::InvalidAudio(format!(
                "audio is {} bytes, limit is {}",
                data.len(),
                self.config.max_audio_bytes
            )));
        }

        debug!(size = data.len(), format = ?format, "Downloaded audio");
        Ok((data, format))
    }

    /// Transcribe raw audio bytes
    #[instrument(skip(self, data), fields(size = data.len()))]
    pub async fn transcribe(
        &self,
        data: Bytes,
        format: AudioFormat,
    ) -> Result<Transcription, SpeechError> {
        let file_part = Part::bytes(data.to_vec())
            .file_name(format!("audio.{}", format.extension()))
            .mime_str(format.mime_type())
            .map_err(|e| SpeechError::InvalidAudio(format!("invalid MIME type: {e}")))?;

        let form = Form::new()
            .part("file", file_part)
            .text("model", self.config.model.clone())
            .text("response_format", "verbose_json");

        let response = self
            .client
            .post(self.transcriptions_url())
            .bearer_auth(self.api_key())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map_or(body, |e| e.error.message);
            warn!(status = %status, message = %message, "Transcription request failed");

            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => SpeechError::RateLimited,
                _ => SpeechError::TranscriptionFailed(format!("HTTP {status}: {message}")),
            });
        }

        let whisper: WhisperResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;

        let mut transcription = Transcription::new(whisper.text);
        if let Some(language) = whisper.language {
            transcription = transcription.with_language(language);
        }
        if let Some(duration) = whisper.duration {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let duration_ms = (duration * 1000.0) as u64;
            transcription = transcription.with_duration(duration_ms);
        }

        debug!(text_len = transcription.text.len(), "Transcription complete");
        Ok(transcription)
    }
}

#[async_trait]
impl SpeechPort for WhisperClient {
    async fn transcribe_url(&self, url: &str) -> Result<TranscriptionResult, ApplicationError> {
        let (data, format) = self
            .download_audio(url)
            .await
            .map_err(|e| ApplicationError::Transcription(e.to_string()))?;

        let transcription = self
            .transcribe(data, format)
            .await
            .map_err(|e| ApplicationError::Transcription(e.to_string()))?;

        Ok(TranscriptionResult {
            text: transcription.text,
            detected_language: transcription.language,
            duration_ms: transcription.duration_ms,
        })
    }

    async fn is_available(&self) -> bool {
        self.client
            .get(format!(
                "{}/models",
                self.config.base_url.trim_end_matches('/')
            ))
            .bearer_auth(self.api_key())
            .send()
            .await
            .is_ok_and(|res| res.status().is_success())
    }

    fn model_name(&self) -> String {
        self.config.model.clone()
    }
}
