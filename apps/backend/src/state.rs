//! Shared application state for the API server.

use std::sync::Arc;
use std::time::Duration;

use solciv_common::traits::LedgerClient;
use solciv_core::RenderOptions;
use solciv_mod_solana::SolanaRpcClient;
use solciv_types::config::AppConfig;

/// Env var overriding `ledger.rpc_url`.
pub const ENV_RPC: &str = "SOLANA_RPC";
/// Env var overriding `server.bind`.
pub const ENV_BIND: &str = "SOLCIV_BIND";

/// Backend application state, shared read-only across all request handlers.
pub struct AppState {
    pub config: AppConfig,
    pub ledger: Arc<dyn LedgerClient>,
    pub render: RenderOptions,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let ledger = SolanaRpcClient::new(
            &config.ledger.rpc_url,
            &config.ledger.commitment,
            config.ledger.timeout_secs.map(Duration::from_secs),
        )?;
        Ok(Self::with_ledger(config, Arc::new(ledger)))
    }

    pub fn with_ledger(config: &AppConfig, ledger: Arc<dyn LedgerClient>) -> Self {
        Self {
            config: config.clone(),
            ledger,
            render: RenderOptions::from(&config.render),
        }
    }
}

/// Apply `SOLANA_RPC` / `SOLCIV_BIND` on top of the file config.
/// Empty values are ignored.
pub fn apply_env_overrides(config: &mut AppConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(rpc) = var(ENV_RPC).filter(|v| !v.trim().is_empty()) {
        config.ledger.rpc_url = rpc.trim().to_string();
    }
    if let Some(bind) = var(ENV_BIND).filter(|v| !v.trim().is_empty()) {
        config.server.bind = bind.trim().to_string();
    }
}
