//! Traduzap HTTP server
//!
//! Main entry point for the webhook server.

use std::{sync::Arc, time::Duration};

use ai_core::GroqClient;
use ai_speech::WhisperClient;
use application::{
    MessageService, TranslationService, VoiceTranslationService,
    ports::{InferencePort, MessengerPort, SpeechPort},
};
use infrastructure::AppConfig;
use integration_waha::WahaClient;
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so logging can honor server.log_format
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {e}");
        AppConfig::default()
    });

    infrastructure::init_logging(&config.server);

    info!("Traduzap v{} starting...", env!("CARGO_PKG_VERSION"));

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    // Adapters
    let groq = GroqClient::new(config.inference.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize inference client: {e}"))?;
    let whisper = WhisperClient::new(config.speech.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize transcription client: {e}"))?;
    let waha = WahaClient::new(config.waha.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize gateway client: {e}"))?;

    let inference: Arc<dyn InferencePort> = Arc::new(groq);
    let speech: Arc<dyn SpeechPort> = Arc::new(whisper);
    let messenger: Arc<dyn MessengerPort> = Arc::new(waha);

    // Services
    let targets = config.translation.targets.clone();
    let translation = TranslationService::new(Arc::clone(&inference), targets.clone());
    let voice = VoiceTranslationService::new(Arc::clone(&speech), Arc::clone(&inference), targets);
    let message_service = Arc::new(MessageService::new(
        Arc::clone(&messenger),
        translation,
        voice,
    ));

    let state = AppState {
        message_service,
        inference,
        messenger,
    };

    // Build router with middleware (first added = outermost)
    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(
            config.server.max_body_size_json_bytes,
        ));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{addr}");

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    // The actual connection draining is handled by axum's graceful_shutdown
}
