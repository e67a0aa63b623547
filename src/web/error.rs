use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::validation::FieldViolation;

/// Errors surfaced to HTTP clients. Internal details are logged, never returned.
#[derive(Debug)]
pub enum ApiError {
    Validation(Vec<FieldViolation>),
    Internal(&'static str),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(v) => write!(f, "invalid input ({} violations)", v.len()),
            Self::Internal(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Invalid input", "errors": errors })),
            )
                .into_response(),
            Self::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": message })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_status() {
        let resp = ApiError::Validation(vec![]).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_status() {
        let resp = ApiError::Internal("Failed to fetch questions").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display() {
        let err = ApiError::Validation(vec![FieldViolation {
            path: vec!["question".to_string()],
            message: "Question too long".to_string(),
        }]);
        assert_eq!(err.to_string(), "invalid input (1 violations)");
    }
}
