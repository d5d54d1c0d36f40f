//!
//! Park-Smart HTTP server for managing parking spots.
//! Reads configuration from TOML file (~/.config/park-smart/config.toml).

use std::sync::Arc;

use tracing::{error, info};

use park_smart::support::ShutdownSignal;
use park_smart::{
    create_api_router, default_config_path, AppConfig, InMemorySpotStore, SpotStorage,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("PARK_SMART_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Park-Smart server...");

    // ── Spot store (seeded, lives for the process lifetime) ────
    let storage: Arc<dyn SpotStorage> = Arc::new(InMemorySpotStore::new());

    // ── Shutdown signal (SIGTERM, SIGINT) ──────────────────────
    let shutdown = ShutdownSignal::new();
    shutdown.start_signal_listener();

    // ── REST API server with graceful shutdown ─────────────────
    let router = create_api_router(storage);
    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Park-Smart server listening at http://{}", addr);
    info!("API docs available at http://{}/api-docs", addr);

    let signal = shutdown.clone();
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            signal.wait().await;
            info!("HTTP server received shutdown signal");
        })
        .await?;

    info!("Park-Smart shutdown complete");
    Ok(())
}
