use axum::Json;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    is_success: bool,
    message: &'static str,
    available_endpoints: &'static [&'static str],
}

/// Handler for GET /
pub async fn health_handler() -> Json<HealthReport> {
    info!("Health check requested");
    Json(HealthReport {
        is_success: true,
        message: "BFHL API Server is running",
        available_endpoints: &["POST /bfhl"],
    })
}
