//! WAHA client for typing indicators and message delivery
//!
//! WAHA exposes a plain JSON-over-HTTP surface; every call carries the
//! session name and the target chat id.

use std::time::Duration;

use application::{ApplicationError, MessengerPort};
use async_trait::async_trait;
use domain::ChatId;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// WAHA API errors
#[derive(Debug, Error)]
pub enum WahaError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Missing configuration: {0}")]
    Configuration(String),
}

/// WAHA client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WahaClientConfig {
    /// Base URL of the WAHA instance
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Session name; WAHA runs one WhatsApp account per session
    #[serde(default = "default_session")]
    pub session: String,

    /// Optional API key, sent as `X-Api-Key`
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_session() -> String {
    "default".to_string()
}

const fn default_timeout_ms() -> u64 {
    10000
}

impl Default for WahaClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            session: default_session(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// WAHA HTTP client
#[derive(Debug, Clone)]
pub struct WahaClient {
    client: Client,
    config: WahaClientConfig,
}

/// Body shared by the typing endpoints
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    session: &'a str,
    #[serde(rename = "chatId")]
    chat_id: &'a str,
}

/// Body for `/api/sendText`
#[derive(Debug, Serialize)]
struct SendTextRequest<'a> {
    session: &'a str,
    #[serde(rename = "chatId")]
    chat_id: &'a str,
    text: &'a str,
}

impl WahaClient {
    /// Create a new WAHA client
    pub fn new(config: WahaClientConfig) -> Result<Self, WahaError> {
        if config.base_url.is_empty() {
            return Err(WahaError::Configuration("base_url is required".to_string()));
        }
        if config.session.is_empty() {
            return Err(WahaError::Configuration("session is required".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/api/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    async fn post_json<T: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<(), WahaError> {
        let mut request = self.client.post(self.api_url(endpoint)).json(body);

        if let Some(key) = &self.config.api_key {
            request = request.header("X-Api-Key", key.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            warn!(endpoint = %endpoint, status = %status, "WAHA call failed");
            Err(WahaError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Show the typing indicator in a chat
    #[instrument(skip(self), fields(chat = %chat_id))]
    pub async fn start_typing(&self, chat_id: &ChatId) -> Result<(), WahaError> {
        self.post_json(
            "startTyping",
            &ChatRequest {
                session: &self.config.session,
                chat_id: chat_id.as_str(),
            },
        )
        .await
    }

    /// Clear the typing indicator in a chat
    #[instrument(skip(self), fields(chat = %chat_id))]
    pub async fn stop_typing(&self, chat_id: &ChatId) -> Result<(), WahaError> {
        self.post_json(
            "stopTyping",
            &ChatRequest {
                session: &self.config.session,
                chat_id: chat_id.as_str(),
            },
        )
        .await
    }

    /// Send a text message to a chat
    #[instrument(skip(self, text), fields(chat = %chat_id, text_len = text.len()))]
    pub async fn send_text(&self, chat_id: &ChatId, text: &str) -> Result<(), WahaError> {
        debug!("Sending text through WAHA");
        self.post_json(
            "sendText",
            &SendTextRequest {
                session: &self.config.session,
                chat_id: chat_id.as_str(),
                text,
            },
        )
        .await
    }

    /// Check if the WAHA instance answers its ping endpoint
    #[instrument(skip(self))]
    pub async fn ping(&self) -> bool {
        let mut request = self.client.get(self.api_url("ping"));
        if let Some(key) = &self.config.api_key {
            request = request.header("X-Api-Key", key.expose_secret());
        }
        request
            .send()
            .await
            .is_ok_and(|res| res.status().is_success())
    }
}

#[async_trait]
impl MessengerPort for WahaClient {
    async fn start_typing(&self, chat_id: &ChatId) -> Result<(), ApplicationError> {
        Self::start_typing(self, chat_id)
            .await
            .map_err(|e| ApplicationError::Gateway(e.to_string()))
    }

    async fn stop_typing(&self, chat_id: &ChatId) -> Result<(), ApplicationError> {
        Self::stop_typing(self, chat_id)
            .await
            .map_err(|e| ApplicationError::Gateway(e.to_string()))
    }

    async fn send_text(&self, chat_id: &ChatId, text: &str) -> Result<(), ApplicationError> {
        Self::send_text(self, chat_id, text)
            .await
            .map_err(|e| ApplicationError::Gateway(e.to_string()))
    }

    async fn is_available(&self) -> bool {
        self.ping().await
    }
}
