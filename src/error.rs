use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Failures raised while classifying a `data` payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("'data' field must be an array")]
    NotAnArray,

    #[error("Item at index {index} must be a string, number, boolean or null")]
    NestedItem { index: usize },

    #[error("Numeric items exceed the supported range")]
    SumOverflow,
}

/// Errors surfaced by the HTTP handlers, rendered as the failure envelope.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing 'data' field in request body")]
    MissingData,

    #[error("Invalid JSON in request body")]
    InvalidJson(#[source] serde_json::Error),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingData | ApiError::InvalidJson(_) | ApiError::Classify(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// `{ "is_success": false, "message": ... }`
#[derive(Debug, Serialize)]
pub struct FailureBody {
    pub is_success: bool,
    pub message: String,
}

impl FailureBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Internal(msg) if msg.trim().is_empty() => "Internal server error".to_string(),
            other => other.to_string(),
        };
        (self.status(), Json(FailureBody::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_bad_request() {
        assert_eq!(ApiError::MissingData.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(ClassifyError::NotAnArray).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ClassifyError::SumOverflow).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_internal_error_is_server_error() {
        let err = ApiError::Internal("boom".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_classify_messages_pass_through() {
        let err = ApiError::from(ClassifyError::NotAnArray);
        assert_eq!(err.to_string(), "'data' field must be an array");

        let err = ApiError::from(ClassifyError::NestedItem { index: 2 });
        assert_eq!(
            err.to_string(),
            "Item at index 2 must be a string, number, boolean or null"
        );
    }

    #[test]
    fn test_blank_internal_message_falls_back() {
        let response = ApiError::Internal(String::new()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
