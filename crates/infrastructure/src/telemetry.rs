//! Logging setup
//!
//! Structured logs via `tracing`; format is chosen by `server.log_format`.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

const DEFAULT_FILTER: &str = "traduzap_server=debug,tower_http=debug,info";

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` overrides the built-in default filter. Calling this twice
/// panics, so it belongs in `main` only.
pub fn init_logging(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(filter);

    if server.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
