use std::str::FromStr;

use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;

use solciv_common::constants::{
    COMMITMENTS, DEFAULT_BIND, DEFAULT_COMMITMENT, DEFAULT_MAP_CREDIT, DEFAULT_RPC_URL,
    DEFAULT_SHARE_CREDIT, TOKEN_PROGRAM_ID,
};
use solciv_common::error::{SolcivError, SolcivResult};

// ═══════════════════════════════════════════════════════════════════════
//  APP CONFIG: top-level, stored at ~/.solciv/config.toml
// ═══════════════════════════════════════════════════════════════════════

/// Top-level configuration stored in `$HOME/.solciv/config.toml`.
///
/// ```toml
/// [system]
/// verbose = false
///
/// [ledger]
/// rpc_url = "https://api.mainnet-beta.solana.com"
/// commitment = "confirmed"
/// token_program_id = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
///
/// [server]
/// bind = "0.0.0.0:3001"
///
/// [render]
/// credit = "Built by @Obbicial • Ireland • Jan 2026"
/// share_credit = "Built by @Obbicial"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub system: SystemConfig,
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SystemConfig {
    /// Enable verbose tracing output.
    #[serde(default)]
    pub verbose: bool,
}

/// Where and how balances are looked up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// JSON-RPC endpoint. Overridden by `SOLANA_RPC` in the server.
    pub rpc_url: String,
    /// `processed`, `confirmed` or `finalized`.
    #[serde(default = "default_commitment")]
    pub commitment: String,
    /// Owner program whose token accounts are counted.
    #[serde(default = "default_token_program")]
    pub token_program_id: String,
    /// Request timeout. `None` keeps the HTTP client's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address for `solciv-server`. Overridden by `SOLCIV_BIND`.
    pub bind: String,
}

/// Text baked into rendered artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Footer line of the SVG map.
    #[serde(default = "default_credit")]
    pub credit: String,
    /// Closing line of the share text.
    #[serde(default = "default_share_credit")]
    pub share_credit: String,
}

fn default_commitment() -> String {
    DEFAULT_COMMITMENT.to_string()
}

fn default_token_program() -> String {
    TOKEN_PROGRAM_ID.to_string()
}

fn default_credit() -> String {
    DEFAULT_MAP_CREDIT.to_string()
}

fn default_share_credit() -> String {
    DEFAULT_SHARE_CREDIT.to_string()
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            commitment: default_commitment(),
            token_program_id: default_token_program(),
            timeout_secs: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: DEFAULT_BIND.to_string() }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            credit: default_credit(),
            share_credit: default_share_credit(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            system: SystemConfig::default(),
            ledger: LedgerConfig::default(),
            server: ServerConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl AppConfig {
    /// Serialize to TOML for writing to disk.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Deserialize from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Check values that serde cannot: URL shape, commitment, program id.
    pub fn validate(&self) -> SolcivResult<()> {
        let rpc = url::Url::parse(&self.ledger.rpc_url)
            .map_err(|e| SolcivError::InvalidConfig(format!("ledger.rpc_url: {e}")))?;
        if !matches!(rpc.scheme(), "http" | "https") {
            return Err(SolcivError::InvalidConfig(format!(
                "ledger.rpc_url: unsupported scheme '{}'",
                rpc.scheme()
            )));
        }

        if !COMMITMENTS.contains(&self.ledger.commitment.as_str()) {
            return Err(SolcivError::InvalidConfig(format!(
                "ledger.commitment: '{}' (expected one of {})",
                self.ledger.commitment,
                COMMITMENTS.join(", ")
            )));
        }

        Pubkey::from_str(&self.ledger.token_program_id)
            .map_err(|e| SolcivError::InvalidConfig(format!("ledger.token_program_id: {e}")))?;

        Ok(())
    }

    /// Default tracing filter for binaries that honour `system.verbose`.
    pub fn log_filter(&self) -> &'static str {
        if self.system.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
