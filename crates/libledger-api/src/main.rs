//! # libledger-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the checkout ledger.
//! Binds to a configurable port (default 8080).

use libledger_api::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let config = AppConfig { port };

    // Initialize the in-memory ledger with its genesis block.
    let state = AppState::try_with_config(config).map_err(|e| {
        tracing::error!("Ledger initialization failed: {e}");
        e
    })?;
    tracing::info!(
        genesis_hash = %state.ledger.lock().tail().hash,
        "Checkout ledger initialized"
    );

    let app = libledger_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("libledger API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
