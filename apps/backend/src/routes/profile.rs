//! POST /api/profile: derive a profile from a known balance.

use std::sync::Arc;

use axum::{body::Bytes, routing::post, Json, Router};

use solciv_common::types::{WalletBalance, WalletProfile};

use super::error::{parse_body, ApiResult};
use crate::state::AppState;

/// Body: `{ "balance": 1.3, "tokenAccountCount": 4 }` (or `sol` / `tokenAccounts`).
async fn profile(body: Bytes) -> ApiResult<Json<WalletProfile>> {
    let wallet: WalletBalance = parse_body(&body)?;
    Ok(Json(solciv_core::derive_profile(wallet)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/profile", post(profile))
}
