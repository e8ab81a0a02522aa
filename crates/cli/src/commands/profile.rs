//! `solciv profile` / `solciv wallet`: derive a profile.

use anyhow::Result;

use solciv_common::types::WalletBalance;
use solciv_types::output::ProfileOutput;
use solciv_utils::output::{render, OutputFormat};

use super::helpers::resolve_wallet;

/// `solciv profile <balance> [--token-accounts N]`: offline derivation.
pub fn run(balance: f64, token_accounts: u64, fmt: OutputFormat) -> Result<()> {
    let profile = solciv_core::derive_profile(WalletBalance::new(balance, token_accounts));
    render(fmt, &ProfileOutput { address: None, profile })
}

/// `solciv wallet <address>`: look up the ledger, then derive.
pub async fn wallet(address: &str, fmt: OutputFormat) -> Result<()> {
    let config = solciv_core::workspace::load_config()?;
    let balance = resolve_wallet(Some(address), None, None, &config).await?;
    let output = ProfileOutput {
        address: Some(address.trim().to_string()),
        profile: solciv_core::derive_profile(balance),
    };
    render(fmt, &output)
}
