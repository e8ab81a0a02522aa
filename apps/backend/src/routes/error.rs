//! `SolcivError` → HTTP response: `{ "error": message }` with the
//! category's status (400 for everything a caller can cause).

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::warn;

use solciv_common::error::SolcivError;

pub struct ApiError(pub SolcivError);

impl From<SolcivError> for ApiError {
    fn from(e: SolcivError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.category().http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        warn!(status = status.as_u16(), error = %self.0, "request failed");
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Decode a JSON object body. Any decoding problem is reported as
/// `Bad payload`, never with the parser's message. An empty body decodes
/// as `{}`.
pub fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, SolcivError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_value(Value::Object(Default::default()))
            .map_err(|_| SolcivError::BadPayload);
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(v @ Value::Object(_)) => serde_json::from_value(v).map_err(|_| SolcivError::BadPayload),
        _ => Err(SolcivError::BadPayload),
    }
}
