//! Rendered artifacts.
//!
//! POST /api/map   : SVG download
//! POST /api/share : share text
//! POST /api/empire: profile + seed + SVG + share text as JSON
//!
//! All three take `{ address?, balance?, tokenAccountCount?, seed? }`.
//! A given balance is used as-is; otherwise the address is looked up.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use solciv_common::constants::SHARE_FILENAME;
use solciv_common::error::SolcivError;
use solciv_common::types::{WalletBalance, WalletProfile};
use solciv_core::empire::resolve_seed;
use solciv_core::render::{SVG_MIME, TEXT_MIME};
use solciv_core::Empire;

use super::error::{parse_body, ApiResult};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmpireRequest {
    #[serde(default, alias = "pubkey")]
    address: Option<String>,
    #[serde(default, alias = "sol")]
    balance: Option<f64>,
    #[serde(default, alias = "tokenAccounts")]
    token_account_count: Option<u64>,
    #[serde(default)]
    seed: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmpireResponse {
    name: String,
    seed: u32,
    #[serde(flatten)]
    profile: WalletProfile,
    svg: String,
    svg_filename: String,
    share_text: String,
}

async fn build(state: &AppState, body: &Bytes) -> ApiResult<Empire> {
    let req: EmpireRequest = parse_body(body)?;
    let address = req
        .address
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty());

    let wallet = match (req.balance, address) {
        (Some(balance), _) => WalletBalance::new(balance, req.token_account_count.unwrap_or(0)),
        (None, Some(addr)) => {
            state
                .ledger
                .wallet_balance(addr, &state.config.ledger.token_program_id)
                .await?
        }
        (None, None) => return Err(SolcivError::MissingAddress.into()),
    };

    let seed = resolve_seed(address, req.seed, &mut rand::thread_rng());
    Ok(Empire::build(solciv_core::derive_profile(wallet), address, seed))
}

fn attachment(filename: &str) -> Result<HeaderValue, SolcivError> {
    HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
        .map_err(|e| SolcivError::Internal(format!("content-disposition: {e}")))
}

async fn map(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult<Response> {
    let empire = build(&state, &body).await?;
    let disposition = attachment(&empire.svg_filename())?;
    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(SVG_MIME)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        empire.svg(&state.render),
    )
        .into_response())
}

async fn share(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult<Response> {
    let empire = build(&state, &body).await?;
    let disposition = attachment(SHARE_FILENAME)?;
    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(TEXT_MIME)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        empire.share(&state.render),
    )
        .into_response())
}

async fn empire(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult<Json<EmpireResponse>> {
    let empire = build(&state, &body).await?;
    Ok(Json(EmpireResponse {
        svg: empire.svg(&state.render),
        svg_filename: empire.svg_filename(),
        share_text: empire.share(&state.render),
        name: empire.name,
        seed: empire.seed,
        profile: empire.profile,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/map", post(map))
        .route("/share", post(share))
        .route("/empire", post(empire))
}
