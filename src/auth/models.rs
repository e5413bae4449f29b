// Authentication data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User role. Accounts are created as Student; Instructor and Admin are
/// assigned out of band.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "user_role")]
pub enum Role {
    Student,
    Instructor,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "Student"),
            Role::Instructor => write!(f, "Instructor"),
            Role::Admin => write!(f, "Admin"),
        }
    }
}

/// User database model. `password_hash` never leaves this type; responses
/// go through `UserResponse`.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Public-safe projection of a user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Registration request DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "All fields are required"))]
    pub name: String,
    #[validate(custom = "crate::validation::validate_email_shape")]
    pub email: String,
    #[validate(custom = "crate::validation::validate_password_strength")]
    pub password: String,
}

/// Login request DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(custom = "crate::validation::validate_email_shape")]
    pub email: String,
    #[validate(length(min = 1, message = "All fields are required"))]
    pub password: String,
}

/// Profile update DTO. Only the allow-listed fields can be patched.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(custom = "crate::validation::validate_email_shape")]
    pub email: Option<String>,
}

/// Successful registration response
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Successful login response
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Profile update response
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Account deletion confirmation
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteProfileResponse {
    pub message: String,
}
