//! Universal error types for SolCiv.
//!
//! Every error carries:
//! - **code**: machine-readable error code (e.g. `INVALID_ADDRESS`)
//! - **category**: error class (`validation`, `config`, `network`, `system`)
//! - **recoverable**: whether the caller can fix the input and retry
//! - **hints**: actionable suggestions
//!
//! JSON output format:
//! ```json
//! {
//!   "ok": false,
//!   "error": {
//!     "code": "INVALID_ADDRESS",
//!     "message": "Invalid Base58 string",
//!     "category": "validation",
//!     "recoverable": true,
//!     "hints": ["Pass a base58 Solana public key"]
//!   }
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// Error category: determines exit code and HTTP status.
///
/// Exit codes:
/// - `0`: success
/// - `1`: user error (config, validation)
/// - `2`: network error
/// - `3`: system error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Network,
    Validation,
    System,
}

impl ErrorCategory {
    /// Process exit code for this category.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::Config => 1,
            ErrorCategory::Validation => 1,
            ErrorCategory::Network => 2,
            ErrorCategory::System => 3,
        }
    }

    /// HTTP status for this category. Lookup failures are reported to the
    /// caller as client errors; only internal faults are 500.
    pub fn http_status(self) -> u16 {
        match self {
            ErrorCategory::System => 500,
            _ => 400,
        }
    }
}

/// Structured error detail for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub category: ErrorCategory,
    pub recoverable: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

/// Top-level error type for all SolCiv operations.
#[derive(Debug, Error)]
pub enum SolcivError {
    // ── Validation ───────────────────────────────────────────────────
    #[error("Bad payload")]
    BadPayload,

    #[error("Missing address")]
    MissingAddress,

    /// Address rejected by the pubkey parser; message kept verbatim.
    #[error("{0}")]
    InvalidAddress(String),

    // ── Network ─────────────────────────────────────────────────────
    /// JSON-RPC error object returned by the ledger node.
    #[error("{message}")]
    Rpc { code: i64, message: String },

    /// Transport failure (connect, timeout, undecodable body).
    #[error("{0}")]
    Network(String),

    // ── Config ───────────────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // ── System ───────────────────────────────────────────────────────
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SolcivError {
    /// Get the structured error detail for JSON output.
    pub fn detail(&self) -> ErrorDetail {
        let (code, category, recoverable, hints): (&str, ErrorCategory, bool, Vec<String>) =
            match self {
                SolcivError::BadPayload => (
                    "BAD_PAYLOAD",
                    ErrorCategory::Validation,
                    true,
                    vec!["Send a JSON object: {\"balance\": 1.5, \"tokenAccountCount\": 3}".into()],
                ),
                SolcivError::MissingAddress => (
                    "MISSING_ADDRESS",
                    ErrorCategory::Validation,
                    true,
                    vec!["Send a JSON object: {\"address\": \"<base58 pubkey>\"}".into()],
                ),
                SolcivError::InvalidAddress(_) => (
                    "INVALID_ADDRESS",
                    ErrorCategory::Validation,
                    true,
                    vec!["Pass a base58 Solana public key".into()],
                ),
                SolcivError::Rpc { .. } => ("RPC_ERROR", ErrorCategory::Network, true, vec![]),
                SolcivError::Network(_) => (
                    "NETWORK_ERROR",
                    ErrorCategory::Network,
                    true,
                    vec!["Check ledger.rpc_url or set SOLANA_RPC".into()],
                ),
                SolcivError::InvalidConfig(_) => (
                    "INVALID_CONFIG",
                    ErrorCategory::Config,
                    true,
                    vec!["Run: solciv configure show".into()],
                ),
                SolcivError::Config(_) => ("CONFIG_ERROR", ErrorCategory::Config, true, vec![]),
                SolcivError::Io(_) => ("IO_ERROR", ErrorCategory::System, false, vec![]),
                SolcivError::Internal(_) => ("INTERNAL", ErrorCategory::System, false, vec![]),
            };

        ErrorDetail {
            code: code.into(),
            message: self.to_string(),
            category,
            recoverable,
            hints,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.detail().category
    }

    /// Exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    /// `{ "ok": false, "error": { ... } }`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "ok": false,
            "error": self.detail(),
        })
    }
}

impl From<std::io::Error> for SolcivError {
    fn from(e: std::io::Error) -> Self {
        SolcivError::Io(e.to_string())
    }
}

pub type SolcivResult<T> = Result<T, SolcivError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_payload_message_is_generic() {
        assert_eq!(SolcivError::BadPayload.to_string(), "Bad payload");
        assert_eq!(SolcivError::MissingAddress.to_string(), "Missing address");
    }

    #[test]
    fn test_collaborator_messages_surface_verbatim() {
        let err = SolcivError::InvalidAddress("Invalid Base58 string".into());
        assert_eq!(err.to_string(), "Invalid Base58 string");

        let err = SolcivError::Rpc {
            code: -32602,
            message: "Invalid param: WrongSize".into(),
        };
        assert_eq!(err.to_string(), "Invalid param: WrongSize");

        let err = SolcivError::Network("error sending request".into());
        assert_eq!(err.to_string(), "error sending request");
    }

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(SolcivError::BadPayload.exit_code(), 1);
        assert_eq!(SolcivError::Network("timeout".into()).exit_code(), 2);
        assert_eq!(SolcivError::Io("disk full".into()).exit_code(), 3);
        assert_eq!(SolcivError::InvalidConfig("bad url".into()).exit_code(), 1);
    }

    #[test]
    fn test_lookup_failures_are_client_errors() {
        assert_eq!(SolcivError::BadPayload.category().http_status(), 400);
        assert_eq!(SolcivError::InvalidAddress("x".into()).category().http_status(), 400);
        assert_eq!(
            SolcivError::Rpc { code: 429, message: "Too many requests".into() }
                .category()
                .http_status(),
            400
        );
        assert_eq!(SolcivError::Internal("boom".into()).category().http_status(), 500);
    }

    #[test]
    fn test_error_json_format() {
        let err = SolcivError::InvalidAddress("String is the wrong size".into());
        let json = err.to_json();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], "INVALID_ADDRESS");
        assert_eq!(json["error"]["category"], "validation");
        assert_eq!(json["error"]["recoverable"], true);
        assert!(json["error"]["hints"].is_array());
    }

    #[test]
    fn test_error_json_no_empty_hints() {
        let err = SolcivError::Rpc { code: -32000, message: "node is behind".into() };
        let serialized = serde_json::to_string(&err.detail()).unwrap();
        assert!(!serialized.contains("\"hints\""));
    }
}
