//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Gateway webhook, trailing slash included as WAHA is configured with it
        .route("/chatbot/webhook", post(handlers::webhook::handle_webhook))
        .route("/chatbot/webhook/", post(handlers::webhook::handle_webhook))
        // Attach state
        .with_state(state)
}
