use axum::Json;
use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use tracing::warn;

use crate::error::FailureBody;

/// Handler for any unmatched route.
pub async fn not_found_handler(method: Method, uri: Uri) -> impl IntoResponse {
    warn!(%method, %uri, "No route matched");
    (
        StatusCode::NOT_FOUND,
        Json(FailureBody::new(
            "Endpoint not found. Available endpoints: POST /bfhl",
        )),
    )
}
