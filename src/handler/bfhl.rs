use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::app::state::AppState;
use crate::config::Identity;
use crate::domain::{ClassificationResult, classify_data};
use crate::error::{ApiError, FailureBody};

/// Success envelope for POST /bfhl.
#[derive(Debug, Serialize)]
pub struct BfhlResponse {
    pub is_success: bool,
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(flatten)]
    pub result: ClassificationResult,
}

/// Handler for POST /bfhl
///
/// The body is parsed by hand so that a missing `data` field and a
/// non-array `data` field map onto their own messages.
pub async fn bfhl_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BfhlResponse>, ApiError> {
    info!(body_size = body.len(), "Received classification request");

    let data = extract_data(&body).inspect_err(|e| warn!(error = %e, "Rejected request body"))?;

    let result =
        classify_data(&data).inspect_err(|e| warn!(error = %e, "Rejected data payload"))?;

    info!(
        even = result.even_numbers.len(),
        odd = result.odd_numbers.len(),
        alphabets = result.alphabets.len(),
        "Classification succeeded"
    );

    Ok(Json(BfhlResponse {
        is_success: true,
        identity: state.identity.as_ref().clone(),
        result,
    }))
}

/// Handler for GET /bfhl
pub async fn method_not_allowed_handler() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(FailureBody::new(
            "Method GET not allowed. Use POST method with data array in request body.",
        )),
    )
}

/// Pulls `data` out of the request body. Empty bodies, non-object bodies and
/// falsy values (`null`, `false`, `0`, `""`) all count as a missing field.
fn extract_data(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::MissingData);
    }

    let mut payload: Value = serde_json::from_slice(body).map_err(ApiError::InvalidJson)?;

    match payload.get_mut("data").map(Value::take) {
        Some(data) if !is_falsy(&data) => Ok(data),
        _ => Err(ApiError::MissingData),
    }
}

/// Arrays and objects, even empty ones, are truthy.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
