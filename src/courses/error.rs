// Error types for the course catalog and enrollment

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use uuid::Uuid;

use crate::error::ErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum CourseError {
    #[error("Course not found")]
    NotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("No courses found for this category")]
    CategoryEmpty,

    #[error("Assigned instructor must hold the Instructor or Admin role")]
    InstructorRoleRequired,

    #[error("Prerequisites not met")]
    PrerequisitesNotMet { unmet: Vec<Uuid> },

    #[error("User is already enrolled in this course")]
    AlreadyEnrolled,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for CourseError {
    fn from(err: sqlx::Error) -> Self {
        CourseError::DatabaseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for CourseError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Surface the first field message; the policy messages are written
        // to stand alone.
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| "Request validation failed".to_string());
        CourseError::ValidationError(message)
    }
}

impl IntoResponse for CourseError {
    fn into_response(self) -> Response {
        match self {
            CourseError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody::new("Course not found")),
            )
                .into_response(),
            CourseError::UserNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody::new("User not found")),
            )
                .into_response(),
            CourseError::CategoryEmpty => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody::new("No courses found for this category")),
            )
                .into_response(),
            CourseError::InstructorRoleRequired => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::new(
                    "Assigned instructor must hold the Instructor or Admin role",
                )),
            )
                .into_response(),
            // The enrollment rejection carries the unmet course ids so the
            // client can show which prerequisites are missing.
            CourseError::PrerequisitesNotMet { unmet } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "Prerequisites not met",
                    "unmet_prerequisites": unmet,
                })),
            )
                .into_response(),
            CourseError::AlreadyEnrolled => (
                StatusCode::CONFLICT,
                Json(ErrorBody::new("User is already enrolled in this course")),
            )
                .into_response(),
            CourseError::ValidationError(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(msg))).into_response()
            }
            CourseError::DatabaseError(msg) => {
                tracing::error!("Database error in courses: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::new("Server error")),
                )
                    .into_response()
            }
        }
    }
}
