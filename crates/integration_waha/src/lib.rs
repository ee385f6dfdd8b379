//! WAHA gateway integration
//!
//! Talks to a self-hosted WAHA (WhatsApp HTTP API) instance: webhook event
//! parsing on the way in, typing indicators and text delivery on the way out.

pub mod client;
pub mod webhook;

pub use client::{WahaClient, WahaClientConfig, WahaError};
pub use webhook::{WebhookEvent, WebhookMedia, WebhookPayload};
