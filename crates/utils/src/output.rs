//! Unified output rendering: JSON or human-readable table.
//!
//! Usage:
//! ```ignore
//! use solciv_utils::output::{OutputFormat, render};
//!
//! let data = ProfileOutput { ... };
//! render(format, &data)?;
//! ```

use anyhow::Result;
use serde::Serialize;

use crate::format::{format_boost, format_estate, format_latency, format_sol};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table (default).
    Table,
    /// Compact JSON (for piping to jq, scripts).
    Json,
    /// Pretty-printed JSON (for reading).
    JsonPretty,
}

/// Types that can render as a human-readable table.
pub trait TableDisplay {
    fn print_table(&self);
}

/// Render structured output: JSON or table depending on format.
pub fn render<T: Serialize + TableDisplay>(format: OutputFormat, data: &T) -> Result<()> {
    if !render_json_or(format, data)? {
        data.print_table();
    }
    Ok(())
}

/// Render just the JSON formats (for types that handle their own table display).
/// Returns true if JSON was rendered, false if table mode was requested.
pub fn render_json_or<T: Serialize>(format: OutputFormat, data: &T) -> Result<bool> {
    match format {
        OutputFormat::Table => Ok(false),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(data)?);
            Ok(true)
        }
        OutputFormat::JsonPretty => {
            println!("{}", serde_json::to_string_pretty(data)?);
            Ok(true)
        }
    }
}

// ─── TableDisplay implementations for output types ──────────────────

use solciv_common::types::WalletProfile;
use solciv_types::output::*;

fn print_profile_rows(p: &WalletProfile) {
    println!("║  Tier        : {:<41}║", p.tier.name());
    println!("║  Estate      : {:<41}║", format_estate(p.estate.name, p.estate.tiles));
    println!("║  SOL         : {:<41}║", format_sol(p.balance));
    println!("║  Token Accts : {:<41}║", p.token_account_count);
    println!("║  $SOLCIV     : {:<41}║", p.derived_currency);
    println!("║  Boost       : {:<41}║", format_boost(p.boost));
}

impl TableDisplay for ProfileOutput {
    fn print_table(&self) {
        println!("╔════════════════════════════════════════════════════════╗");
        println!("║  SOLCIV PROFILE                                        ║");
        println!("╠════════════════════════════════════════════════════════╣");
        if let Some(addr) = &self.address {
            println!("║  Address     : {:<41}║", addr);
        }
        print_profile_rows(&self.profile);
        println!("╚════════════════════════════════════════════════════════╝");
    }
}

impl TableDisplay for EmpireOutput {
    fn print_table(&self) {
        println!("╔════════════════════════════════════════════════════════╗");
        println!("║  SOLCIV EMPIRE MAP                                     ║");
        println!("╠════════════════════════════════════════════════════════╣");
        println!("║  Name        : {:<41}║", self.name);
        println!("║  Seed        : {:<41}║", self.seed);
        println!("║  Shapes      : {:<41}║", self.shapes);
        print_profile_rows(&self.profile);
        println!("╚════════════════════════════════════════════════════════╝");
        if let Some(path) = &self.svg_path {
            println!("✓ map   → {path}");
        }
        if let Some(path) = &self.share_path {
            println!("✓ share → {path}");
        }
        println!();
        println!("{}", self.share_text);
    }
}

impl TableDisplay for DoctorOutput {
    fn print_table(&self) {
        println!("┌─────────────────────────────────────────────┐");
        println!("│  SOLCIV DOCTOR                              │");
        println!("├─────────────────────────────────────────────┤");
        let cfg = if self.config_ok { "✓" } else { "✗" };
        println!("│  Config         : {:<26}│", cfg);
        if let Some(e) = &self.config_error {
            println!("│    {:<41}│", truncate(e, 41));
        }
        println!("│  RPC            : {:<26}│", truncate(&self.rpc_url, 26));
        match self.rpc_latency_ms {
            Some(ms) => println!("│  RPC Latency    : {:<26}│", format_latency(ms)),
            None => println!("│  RPC Latency    : {:<26}│", "✗ unreachable"),
        }
        if let Some(e) = &self.rpc_error {
            println!("│    {:<41}│", truncate(e, 41));
        }
        println!("└─────────────────────────────────────────────┘");
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    } else {
        s.to_string()
    }
}
