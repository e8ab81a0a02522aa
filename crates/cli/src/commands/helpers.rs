//! Shared helpers for CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use solciv_common::constants::SHARE_FILENAME;
use solciv_common::error::SolcivError;
use solciv_common::traits::LedgerClient;
use solciv_common::types::WalletBalance;
use solciv_core::{Empire, RenderOptions};
use solciv_types::config::AppConfig;

use crate::factory;

/// Where a command's wallet numbers come from: explicit `--balance`
/// wins, otherwise the address is looked up on the ledger.
pub async fn resolve_wallet(
    address: Option<&str>,
    balance: Option<f64>,
    token_accounts: Option<u64>,
    config: &AppConfig,
) -> Result<WalletBalance> {
    if let Some(balance) = balance {
        return Ok(WalletBalance::new(balance, token_accounts.unwrap_or(0)));
    }
    let address = address.ok_or(SolcivError::MissingAddress)?;
    let ledger = factory::ledger_from_config(config)?;
    let wallet = ledger
        .wallet_balance(address, &config.ledger.token_program_id)
        .await?;
    info!(address, balance = wallet.balance, "wallet looked up");
    Ok(wallet)
}

/// Output directory: `--out` or `~/.solciv/maps`.
pub fn output_dir(out: Option<PathBuf>) -> Result<PathBuf> {
    match out {
        Some(dir) => Ok(dir),
        None => solciv_core::workspace::maps_dir(),
    }
}

/// Write `solciv_{name}.svg` and `solciv_share.txt` into `dir`.
pub fn write_artifacts(dir: &Path, empire: &Empire, opts: &RenderOptions) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let svg_path = dir.join(empire.svg_filename());
    fs::write(&svg_path, empire.svg(opts))
        .with_context(|| format!("Failed to write {}", svg_path.display()))?;

    let share_path = dir.join(SHARE_FILENAME);
    fs::write(&share_path, empire.share(opts))
        .with_context(|| format!("Failed to write {}", share_path.display()))?;

    Ok((svg_path, share_path))
}
