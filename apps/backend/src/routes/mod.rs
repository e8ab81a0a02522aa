//! API routes for the SolCiv backend.

pub mod empire;
pub mod error;
pub mod health;
pub mod profile;
pub mod wallet;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Build the API router with all routes.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::router())
        .merge(profile::router())
        .merge(wallet::router())
        .merge(empire::router())
}

/// Full application: `/api` routes behind an open CORS policy.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_router())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
pub mod testing {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{HeaderMap, Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    use solciv_common::error::{SolcivError, SolcivResult};
    use solciv_common::traits::LedgerClient;
    use solciv_types::config::AppConfig;

    use crate::state::AppState;

    /// Wrapped SOL mint; the fake ledger gives it 250 SOL and 3 token accounts.
    pub const RICH: &str = "So11111111111111111111111111111111111111112";
    /// Valid key that the fake ledger answers with a rate-limit error.
    pub const THROTTLED: &str = "11111111111111111111111111111111";

    struct FakeLedger;

    #[async_trait]
    impl LedgerClient for FakeLedger {
        fn name(&self) -> &str {
            "fake"
        }

        async fn balance_lamports(&self, address: &str) -> SolcivResult<u64> {
            match address {
                RICH => Ok(250_000_000_000),
                THROTTLED => Err(SolcivError::Rpc {
                    code: 429,
                    message: "429 Too Many Requests".into(),
                }),
                _ => Err(SolcivError::InvalidAddress("Invalid Base58 string".into())),
            }
        }

        async fn token_account_count(&self, _address: &str, _program_id: &str) -> SolcivResult<u64> {
            Ok(3)
        }
    }

    pub fn app() -> Router {
        let state = AppState::with_ledger(&AppConfig::default(), Arc::new(FakeLedger));
        super::app(Arc::new(state))
    }

    pub async fn send(req: Request<Body>) -> (StatusCode, HeaderMap, String) {
        let resp = app().oneshot(req).await.unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn post_raw_response(uri: &str, body: &str) -> (StatusCode, HeaderMap, String) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(req).await
    }

    pub async fn post_raw(uri: &str, body: &str) -> (StatusCode, Value) {
        let (status, _, text) = post_raw_response(uri, body).await;
        (status, serde_json::from_str(&text).unwrap_or(Value::Null))
    }

    pub async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        post_raw(uri, &body.to_string()).await
    }
}
