//! Ledger factory: builds the balance lookup client from config.
//!
//! Lives in `cli` because `core` must NOT depend on ledger modules.

use std::time::Duration;

use anyhow::Result;

use solciv_mod_solana::SolanaRpcClient;
use solciv_types::config::AppConfig;

/// Build the Solana RPC client described by `[ledger]`.
pub fn ledger_from_config(config: &AppConfig) -> Result<SolanaRpcClient> {
    let client = SolanaRpcClient::new(
        &config.ledger.rpc_url,
        &config.ledger.commitment,
        config.ledger.timeout_secs.map(Duration::from_secs),
    )?;
    Ok(client)
}
