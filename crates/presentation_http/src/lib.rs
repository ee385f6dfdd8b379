//! Traduzap HTTP presentation layer
//!
//! One webhook endpoint for the gateway plus health probes.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
