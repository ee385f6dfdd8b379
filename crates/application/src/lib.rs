//! Application layer - Use cases and orchestration
//!
//! Defines the ports the adapters implement and the services that route one
//! inbound message through classification, translation, and the messaging
//! gateway.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
