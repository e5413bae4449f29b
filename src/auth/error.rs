// Authentication and authorization error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;
use tracing::{error, warn};

use crate::auth::models::Role;
use crate::error::ErrorBody;

/// Authentication and authorization error types
#[derive(Debug)]
pub enum AuthError {
    /// Request body failed validation
    ValidationError(String),
    /// Unknown email or wrong password. One variant for both causes so the
    /// response never reveals which part was wrong.
    InvalidCredentials,
    /// Malformed, mis-signed, or expired token. A single kind: callers never
    /// need to distinguish these for access control.
    InvalidToken,
    /// No bearer credential in the Authorization header
    MissingToken,
    /// Email is already registered
    EmailTaken,
    /// Caller authenticated but lacks the required role
    InsufficientRole { required: Role, actual: Role },
    /// Subject of a valid token no longer exists
    UserNotFound,
    /// Hashing failed internally
    PasswordHashError,
    /// Token could not be signed
    TokenIssueError(String),
    /// Store failure
    DatabaseError(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::ValidationError(msg) => write!(f, "{}", msg),
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::InvalidToken => write!(f, "Invalid or expired token"),
            AuthError::MissingToken => write!(f, "Unauthorized: No token provided"),
            AuthError::EmailTaken => write!(f, "Email already in use"),
            AuthError::InsufficientRole { required, actual } => write!(
                f,
                "Insufficient permissions: required role '{}', but user has role '{}'",
                required, actual
            ),
            AuthError::UserNotFound => write!(f, "User not found"),
            AuthError::PasswordHashError => write!(f, "Password hashing error"),
            AuthError::TokenIssueError(msg) => write!(f, "Token generation error: {}", msg),
            AuthError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuthError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AuthError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, "Invalid credentials".to_string())
            }
            AuthError::InvalidToken => {
                warn!("Rejected invalid or expired token");
                (
                    StatusCode::UNAUTHORIZED,
                    "Invalid or expired token".to_string(),
                )
            }
            AuthError::MissingToken => {
                warn!("Missing token on protected route");
                (
                    StatusCode::UNAUTHORIZED,
                    "Unauthorized: No token provided".to_string(),
                )
            }
            AuthError::EmailTaken => {
                (StatusCode::BAD_REQUEST, "Email already in use".to_string())
            }
            AuthError::InsufficientRole { required, actual } => {
                warn!(
                    "Authorization failed: required role '{}', user has role '{}'",
                    required, actual
                );
                (
                    StatusCode::FORBIDDEN,
                    format!("Insufficient permissions: required role '{}'", required),
                )
            }
            AuthError::UserNotFound => {
                (StatusCode::NOT_FOUND, "User not found".to_string())
            }
            AuthError::PasswordHashError => {
                error!("Password hashing error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            AuthError::TokenIssueError(msg) => {
                error!("Token generation error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            AuthError::DatabaseError(msg) => {
                error!("Database error in auth: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

impl From<validator::ValidationErrors> for AuthError {
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
        AuthError::ValidationError(message)
    }
}
