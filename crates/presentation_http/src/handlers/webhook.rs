//! Gateway webhook handler
//!
//! WAHA posts one JSON event per inbound message. Any malformed payload is
//! the caller's problem (400); everything else flows through the message
//! service and comes back as a small status body.

use axum::{Json, body::Bytes, extract::State};
use integration_waha::WebhookEvent;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{error::ApiError, state::AppState};

/// Response for a processed webhook event
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    /// Processing status, "success" when the event was handled
    pub status: String,
    /// What happened to the message, when there is something to say
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WebhookResponse {
    fn success(message: Option<String>) -> Self {
        Self {
            status: "success".to_string(),
            message,
        }
    }
}

/// Webhook message handler (POST)
#[instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn handle_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<WebhookResponse>, ApiError> {
    let event: WebhookEvent = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("Malformed webhook payload: {e}")))?;

    debug!(event_id = %event.id, event_type = %event.event, "Webhook event received");

    let inbound = event
        .into_inbound_message()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let outcome = state.message_service.handle(&inbound).await?;

    let message = match outcome {
        application::MessageOutcome::Ignored => {
            Some(application::IGNORED_NOTICE.to_string())
        }
        application::MessageOutcome::Replied { .. } => {
            info!("Webhook event answered");
            None
        }
        application::MessageOutcome::Unprocessable { notice } => Some(notice),
    };

    Ok(Json(WebhookResponse::success(message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_without_message_is_just_status() {
        let resp = WebhookResponse::success(None);
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"status":"success"}"#);
    }

    #[test]
    fn response_message_uses_the_message_key() {
        let resp = WebhookResponse::success(Some("Mensagem ignorada".to_string()));
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"success\""));
        assert!(json.contains("\"message\":\"Mensagem ignorada\""));
    }
}
