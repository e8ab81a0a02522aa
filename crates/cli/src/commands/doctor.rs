//! `solciv doctor`: config and RPC health checks.

use std::time::Instant;

use anyhow::Result;
use tracing::warn;

use solciv_types::output::DoctorOutput;
use solciv_utils::output::{render, OutputFormat};

use crate::factory;

/// `solciv doctor`
pub async fn run(fmt: OutputFormat) -> Result<()> {
    // ── Check 1: Config integrity ───────────────────────────────
    let loaded = solciv_core::workspace::load_config();
    let (config, config_error) = match loaded {
        Ok(c) => {
            let err = c.validate().err().map(|e| e.to_string());
            (c, err)
        }
        Err(e) => (Default::default(), Some(format!("{e:#}"))),
    };

    // ── Check 2: RPC connectivity ───────────────────────────────
    let (rpc_latency_ms, rpc_error) = match check_rpc_latency(&config).await {
        Ok(ms) => (Some(ms), None),
        Err(e) => {
            warn!(error = %e, "rpc health check failed");
            (None, Some(format!("{e:#}")))
        }
    };

    let output = DoctorOutput {
        config_ok: config_error.is_none(),
        config_error,
        rpc_url: config.ledger.rpc_url.clone(),
        rpc_latency_ms,
        rpc_error,
    };

    render(fmt, &output)
}

async fn check_rpc_latency(config: &solciv_types::config::AppConfig) -> Result<u64> {
    let client = factory::ledger_from_config(config)?;
    let start = Instant::now();
    client.health().await?;
    Ok(start.elapsed().as_millis() as u64)
}
