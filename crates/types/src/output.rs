//! Structured output types for JSON/table rendering.
//!
//! Every data-producing command returns one of these types.
//! They all derive `Serialize` for JSON output, and `solciv-utils`
//! implements `TableDisplay` for human-readable table rendering.

use serde::Serialize;

use solciv_common::types::WalletProfile;

// ─── Profile ────────────────────────────────────────────────────────

/// `solciv profile` / `solciv wallet`.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(flatten)]
    pub profile: WalletProfile,
}

// ─── Empire ─────────────────────────────────────────────────────────

/// `solciv map` / `solciv guest`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmpireOutput {
    pub name: String,
    pub seed: u32,
    pub shapes: usize,
    #[serde(flatten)]
    pub profile: WalletProfile,
    pub share_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_path: Option<String>,
}

// ─── Doctor ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct DoctorOutput {
    pub config_ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_error: Option<String>,
    pub rpc_url: String,
    pub rpc_latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_error: Option<String>,
}
