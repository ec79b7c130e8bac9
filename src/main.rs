//! Crypto Intelligence API Server
//!
//! Usage:
//!   cargo run --bin crypto_intel_api
//!
//! Environment:
//!   PORT              - Server port (default: 8000)
//!   HOST              - Server host (default: 0.0.0.0)
//!   ETHERSCAN_API_KEY - Enables Etherscan supply enrichment
//!   MESSARI_API_KEY   - Authenticates Messari profile lookups
//!   RUST_LOG          - Log level (default: info)

use crypto_intel::utils::constants::{APP_NAME, APP_VERSION};
use crypto_intel::{create_router, AppConfig, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = AppConfig::from_env();
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let state = Arc::new(AppState::new(config)?);
    let app = create_router(state);

    info!("🚀 {} v{} starting on http://{}", APP_NAME, APP_VERSION, addr);
    info!("");
    info!("Endpoints:");
    info!("  GET  /api/search?q=                 - Coin / exchange / category search");
    info!("  GET  /api/markets                   - Market data passthrough");
    info!("  GET  /api/coin/:coin_id             - Coin details");
    info!("  GET  /api/token/ethereum/:address   - Contract lookup");
    info!("  GET  /api/token/ethereum/:address/full - Multi-source token report");
    info!("  POST /api/ask                       - Free-text intent router");
    info!("  GET  /test                          - Configuration diagnostics");
    info!("");
    info!("Press Ctrl+C for graceful shutdown");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("🛑 {} shutdown complete", APP_NAME);

    Ok(())
}
