//! SolCiv Backend: HTTP API
//!
//! Responsibilities:
//! - Profile derivation from a known balance
//! - Wallet lookups against the Solana RPC
//! - Empire map (SVG) and share-text rendering

mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `.env` is optional; real env vars win.
    dotenvy::dotenv().ok();

    solciv_core::init_workspace()?;
    let mut config = solciv_core::workspace::load_config()?;
    state::apply_env_overrides(&mut config, |k| std::env::var(k).ok());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    config.validate()?;
    tracing::info!(rpc = %config.ledger.rpc_url, "SolCiv backend starting...");

    let state = Arc::new(AppState::from_config(&config)?);
    let app = routes::app(state);

    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address: {}", config.server.bind))?;
    tracing::info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
