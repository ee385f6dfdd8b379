//! Application state shared across handlers

use std::sync::Arc;

use application::{MessageService, ports::InferencePort, ports::MessengerPort};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Routing service driving the whole reply pipeline
    pub message_service: Arc<MessageService>,
    /// Inference port, kept for readiness reporting
    pub inference: Arc<dyn InferencePort>,
    /// Gateway port, kept for readiness reporting
    pub messenger: Arc<dyn MessengerPort>,
}
