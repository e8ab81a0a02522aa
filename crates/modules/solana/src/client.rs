//! Solana JSON-RPC client.
//!
//! Two calls per lookup (`getBalance`, `getTokenAccountsByOwner`), no
//! retries. Addresses are parsed locally first so a malformed key never
//! reaches the network.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;
use tracing::{debug, info};

use solciv_common::error::{SolcivError, SolcivResult};
use solciv_common::traits::LedgerClient;

/// Read-only Solana ledger client.
#[derive(Clone)]
pub struct SolanaRpcClient {
    http: Client,
    rpc_url: String,
    commitment: String,
}

// ── JSON-RPC Types ──────────────────────────────────────────────────

#[derive(Serialize)]
struct JsonRpcRequest<'a, T: Serialize> {
    jsonrpc: &'a str,
    method: &'a str,
    params: T,
    id: u64,
}

#[derive(Deserialize, Debug)]
struct JsonRpcResponse<T> {
    result: Option<T>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize, Debug)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// `{ context, value }` envelope used by account queries.
#[derive(Deserialize, Debug)]
struct RpcValue<T> {
    value: T,
}

impl SolanaRpcClient {
    /// Build a client for `rpc_url`. `timeout` of `None` keeps reqwest's default.
    pub fn new(rpc_url: &str, commitment: &str, timeout: Option<Duration>) -> SolcivResult<Self> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let http = builder
            .build()
            .map_err(|e| SolcivError::Internal(format!("Failed to build HTTP client: {e}")))?;

        info!(rpc_url, commitment, "Solana RPC client initialized");

        Ok(Self {
            http,
            rpc_url: rpc_url.to_string(),
            commitment: commitment.to_string(),
        })
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Parse a base58 public key, keeping the parser's message on failure.
    pub fn parse_address(address: &str) -> SolcivResult<Pubkey> {
        Pubkey::from_str(address.trim()).map_err(|e| SolcivError::InvalidAddress(e.to_string()))
    }

    async fn rpc_call<P: Serialize, R: DeserializeOwned>(
        &self,
        method: &str,
        params: P,
    ) -> SolcivResult<R> {
        let body = JsonRpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: 1,
        };

        debug!(method, url = %self.rpc_url, "rpc call");

        let resp = self
            .http
            .post(&self.rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SolcivError::Network(format!("RPC request failed: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| SolcivError::Network(e.to_string()))?;

        match serde_json::from_str::<JsonRpcResponse<R>>(&text) {
            Ok(JsonRpcResponse { error: Some(err), .. }) => Err(SolcivError::Rpc {
                code: err.code,
                message: err.message,
            }),
            _ if !status.is_success() => {
                Err(SolcivError::Network(format!("HTTP {status}: {text}")))
            }
            Ok(res) => res
                .result
                .ok_or_else(|| SolcivError::Network(format!("{method} returned no result"))),
            Err(e) => Err(SolcivError::Network(format!("Invalid RPC response: {e}"))),
        }
    }

    /// `getHealth`; `Ok` when the node reports itself healthy.
    pub async fn health(&self) -> SolcivResult<()> {
        let _: String = self.rpc_call("getHealth", serde_json::json!([])).await?;
        Ok(())
    }
}

#[async_trait]
impl LedgerClient for SolanaRpcClient {
    fn name(&self) -> &str {
        "solana"
    }

    async fn balance_lamports(&self, address: &str) -> SolcivResult<u64> {
        let pubkey = Self::parse_address(address)?;
        let params = serde_json::json!([
            pubkey.to_string(),
            { "commitment": self.commitment },
        ]);
        let res: RpcValue<u64> = self.rpc_call("getBalance", params).await?;
        Ok(res.value)
    }

    async fn token_account_count(&self, address: &str, program_id: &str) -> SolcivResult<u64> {
        let pubkey = Self::parse_address(address)?;
        let params = serde_json::json!([
            pubkey.to_string(),
            { "programId": program_id },
            { "encoding": "base64", "commitment": self.commitment },
        ]);
        let res: RpcValue<Vec<IgnoredAny>> =
            self.rpc_call("getTokenAccountsByOwner", params).await?;
        Ok(res.value.len() as u64)
    }
}
