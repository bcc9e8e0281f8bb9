use crate::app::state::AppState;
use crate::error::ApiError;
use crate::handler::bfhl::{bfhl_handler, method_not_allowed_handler};
use crate::handler::fallback::not_found_handler;
use crate::handler::health::health_handler;
use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

/// Build the HTTP router (health, /bfhl, 404 fallback).
pub fn main_router(state: AppState) -> Router {
    let health_router = Router::new().route("/", get(health_handler));

    let bfhl_router = Router::new()
        .route(
            "/bfhl",
            post(bfhl_handler).get(method_not_allowed_handler),
        )
        .with_state(state);

    Router::new()
        .merge(health_router)
        .merge(bfhl_router)
        .fallback(not_found_handler)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Maps a handler panic onto the 500 envelope without leaking its payload.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    error!(detail, "Handler panicked");

    ApiError::Internal(String::new()).into_response()
}
