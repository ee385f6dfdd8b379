//! Groq client implementation
//!
//! OpenAI-compatible chat-completions wire format over reqwest. The base URL
//! is configurable so tests can point the client at a mock server.

use std::time::{Duration, Instant};

use application::{ApplicationError, InferencePort, InferenceResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{config::InferenceConfig, error::InferenceError};

/// Groq inference client
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    config: InferenceConfig,
}

/// OpenAI-format chat request
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// OpenAI-format chat response
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    model: String,
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    total_tokens: u32,
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

impl GroqClient {
    /// Create a new client.
    ///
    /// Fails when the API key is missing; configuration is validated at
    /// startup, not at call time.
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        if config.api_key.is_none() {
            return Err(InferenceError::Configuration(
                "api_key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.default_model,
            "Initialized Groq inference client"
        );

        Ok(Self { client, config })
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn api_key(&self) -> &str {
        // Presence is checked in new()
        self.config
            .api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .unwrap_or_default()
    }

    async fn chat(
        &self,
        system_prompt: &str,
        message: &str,
    ) -> Result<InferenceResult, InferenceError> {
        let request = ChatCompletionRequest {
            model: self.config.default_model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: message.to_string(),
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!(model = %request.model, "Sending chat completion request");
        let started = Instant::now();

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(self.api_key())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map_or(body, |e| e.error.message);
            warn!(status = %status, message = %message, "Chat completion failed");

            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => InferenceError::RateLimited,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    InferenceError::AuthFailed(message)
                }
                _ => InferenceError::ServerError(format!("Status {status}: {message}")),
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| InferenceError::InvalidResponse("no choices in response".to_string()))?;

        #[allow(clippy::cast_possible_truncation)]
        let latency_ms = started.elapsed().as_millis() as u64;

        debug!(latency_ms, "Chat completion succeeded");

        Ok(InferenceResult {
            content,
            model: completion.model,
            tokens_used: completion.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }
}

#[async_trait]
impl InferencePort for GroqClient {
    #[instrument(skip(self, system_prompt, message))]
    async fn generate_with_system(
        &self,
        system_prompt: &str,
        message: &str,
    ) -> Result<InferenceResult, ApplicationError> {
        self.chat(system_prompt, message)
            .await
            .map_err(|e| ApplicationError::Inference(e.to_string()))
    }

    async fn is_healthy(&self) -> bool {
        self.client
            .get(self.api_url("models"))
            .bearer_auth(self.api_key())
            .send()
            .await
            .is_ok_and(|res| res.status().is_success())
    }

    fn current_model(&self) -> String {
        self.config.default_model.clone()
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn test_config() -> InferenceConfig {
        InferenceConfig {
            api_key: Some(SecretString::from("gsk_test")),
            ..Default::default()
        }
    }

    #[test]
    fn client_requires_api_key() {
        let result = GroqClient::new(InferenceConfig::default());
        assert!(matches!(result, Err(InferenceError::Configuration(_))));
    }

    #[test]
    fn client_creation_succeeds_with_key() {
        assert!(GroqClient::new(test_config()).is_ok());
    }

    #[test]
    fn api_url_joins_cleanly() {
        let mut config = test_config();
        config.base_url = "http://localhost:9000/".to_string();
        let client = GroqClient::new(config).unwrap();
        assert_eq!(
            client.api_url("/chat/completions"),
            "http://localhost:9000/chat/completions"
        );
    }

    #[test]
    fn current_model_reflects_config() {
        let client = GroqClient::new(test_config()).unwrap();
        assert_eq!(client.current_model(), "llama-3.1-70b-versatile");
    }

    #[test]
    fn response_parsing() {
        let json = r#"{
            "id": "chatcmpl-123",
            "model": "llama-3.1-70b-versatile",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello, how are you?"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 20, "completion_tokens": 7, "total_tokens": 27}
        }"#;

        let parsed: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.model, "llama-3.1-70b-versatile");
        assert_eq!(parsed.choices[0].message.content, "Hello, how are you?");
        assert_eq!(parsed.usage.unwrap().total_tokens, 27);
    }

    #[test]
    fn error_body_parsing() {
        let json = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#;
        let parsed: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.error.message, "Invalid API Key");
    }
}
