//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use final_tap_shared::types::{ErrorDetail, ErrorResponse};
use final_tap_shared::validation::collect_violations;
use final_tap_shared::{DurationError, ScoringError};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Validation failure tied to one profile field
    #[error("Invalid {field}: {message}")]
    InvalidField { field: String, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let violations = collect_violations(&errors);
        match violations.as_slice() {
            [only] => ApiError::InvalidField {
                field: only.field.clone(),
                message: only.user_message(),
            },
            [] => ApiError::Validation(errors.to_string()),
            many => ApiError::Validation(
                many.iter()
                    .map(|v| v.user_message())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
        }
    }
}

impl From<ScoringError> for ApiError {
    fn from(err: ScoringError) -> Self {
        ApiError::InvalidField {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DurationError> for ApiError {
    fn from(err: DurationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut field = None;
        let (status, code, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            ApiError::InvalidField { field: f, message } => {
                field = Some(f);
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_validation_error_status() {
        let error = ApiError::Validation("Invalid input".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_status() {
        let error = ApiError::NotFound("No such route".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_status() {
        let error = ApiError::Internal(anyhow::anyhow!("boom"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_scoring_error_names_field() {
        let error = ApiError::from(ScoringError::InvalidBiometric {
            field: "height",
            value: 0.0,
        });
        match &error {
            ApiError::InvalidField { field, .. } => assert_eq!(field, "height"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_single_violation_keeps_field() {
        let mut errors = ValidationErrors::new();
        let mut e = ValidationError::new("range");
        e.message = Some("must be between 0 and 24 hours".into());
        errors.add("screen_time", e);

        match ApiError::from(errors) {
            ApiError::InvalidField { field, message } => {
                assert_eq!(field, "screenTime");
                assert_eq!(message, "Screen Time: must be between 0 and 24 hours");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_many_violations_are_joined() {
        let mut errors = ValidationErrors::new();
        errors.add("age", ValidationError::new("range"));
        errors.add("weight", ValidationError::new("range"));

        match ApiError::from(errors) {
            ApiError::Validation(msg) => assert_eq!(msg, "Age: range; Weight: range"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
