// Shared error type for the plain CRUD surface (courses content, admin reports)
// Auth and enrollment carry their own error enums; everything else maps
// through ApiError.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::{debug, error};

/// Error type returned by resource handlers
#[derive(Debug)]
pub enum ApiError {
    /// Request body failed validation (HTTP 400)
    ValidationError(validator::ValidationErrors),

    /// Named resource does not exist (HTTP 404)
    NotFound { resource: String, id: String },

    /// Underlying store failure (HTTP 500, details logged only)
    DatabaseError(sqlx::Error),
}

/// Client-facing error body: `{message, error?}`
#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_detail(message: impl Into<String>, detail: serde_json::Value) -> Self {
        Self {
            message: message.into(),
            error: Some(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::ValidationError(errors) => {
                debug!("Validation error: {:?}", errors);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody::with_detail(
                        "Request validation failed",
                        serde_json::to_value(errors).unwrap_or(serde_json::json!({})),
                    ),
                )
            }
            ApiError::NotFound { resource, id } => {
                debug!("{} {} not found", resource, id);
                (
                    StatusCode::NOT_FOUND,
                    ErrorBody::new(format!("{} not found", resource)),
                )
            }
            ApiError::DatabaseError(db_error) => {
                // Full detail stays in the logs, never in the response
                error!("Database error: {:?}", db_error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl ApiError {
    /// Build a validation error from a single field message, for checks that
    /// go beyond what the derive attributes can express.
    pub fn validation_message(field: &'static str, message: &str) -> Self {
        let mut error = validator::ValidationError::new("invalid");
        error.message = Some(message.to_string().into());
        let mut errors = validator::ValidationErrors::new();
        errors.add(field, error);
        ApiError::ValidationError(errors)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> Self {
        ApiError::DatabaseError(error)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(errors)
    }
}
