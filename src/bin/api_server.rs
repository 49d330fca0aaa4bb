// API Server Binary Entry Point
//
// Purpose: Start the Axum server for plant identification and botanical chat
// Usage: cargo run --features api --bin api_server

use flora_identifier::{create_router, AppState, ServerConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "flora_identifier=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = ServerConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  UPLOAD_DIR: {}", config.upload_dir.display());
    tracing::info!("  STATIC_DIR: {}", config.static_dir.display());
    tracing::info!("  WIKIPEDIA: {}", if config.wikipedia.is_some() { "enabled" } else { "disabled" });
    tracing::info!("  RANDOM: {:?}", config.random);

    let state = AppState::new(&config).await?;
    tracing::info!("Application state initialized (model loaded: {})", state.capabilities.model_loaded);

    // Create router with all endpoints and middleware
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
