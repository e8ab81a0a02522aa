//! POST /api/wallet: balance + token-account count from the ledger.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use solciv_common::error::SolcivError;
use solciv_common::types::WalletBalance;

use super::error::{parse_body, ApiResult};
use crate::state::AppState;

#[derive(Deserialize)]
struct WalletRequest {
    #[serde(default, alias = "pubkey")]
    address: Option<Value>,
}

/// Body: `{ "address": "<base58>" }` (or `pubkey`).
async fn wallet(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult<Json<WalletBalance>> {
    let req: WalletRequest = parse_body(&body)?;
    let address = match req.address {
        Some(Value::String(s)) if !s.trim().is_empty() => s,
        _ => return Err(SolcivError::MissingAddress.into()),
    };
    let address = address.trim();

    let wallet = state
        .ledger
        .wallet_balance(address, &state.config.ledger.token_program_id)
        .await?;
    info!(address, balance = wallet.balance, token_accounts = wallet.token_account_count, "wallet lookup");
    Ok(Json(wallet))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/wallet", post(wallet))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::testing::{post_json, post_raw, RICH, THROTTLED};

    #[tokio::test]
    async fn test_wallet_lookup() {
        let (status, body) = post_json("/api/wallet", json!({ "address": RICH })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "balance": 250.0, "tokenAccountCount": 3 }));
    }

    #[tokio::test]
    async fn test_wallet_accepts_pubkey_alias() {
        let (status, body) = post_json("/api/wallet", json!({ "pubkey": RICH })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tokenAccountCount"], 3);
    }

    #[tokio::test]
    async fn test_wallet_missing_address() {
        for payload in [json!({}), json!({ "address": "" }), json!({ "address": 42 })] {
            let (status, body) = post_json("/api/wallet", payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "error": "Missing address" }));
        }
    }

    #[tokio::test]
    async fn test_wallet_invalid_address_message_verbatim() {
        let (status, body) = post_json("/api/wallet", json!({ "address": "nope" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid Base58 string" }));
    }

    #[tokio::test]
    async fn test_wallet_rpc_failure_is_client_error() {
        let (status, body) =
            post_json("/api/wallet", json!({ "address": THROTTLED })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "429 Too Many Requests" }));
    }

    #[tokio::test]
    async fn test_wallet_malformed_body() {
        let (status, body) = post_raw("/api/wallet", "{").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Bad payload" }));
    }
}
