// HTTP handlers for the user surface

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::auth::{
    error::AuthError,
    middleware::AuthenticatedUser,
    models::{
        DeleteProfileResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
        UpdateProfileRequest, UpdateProfileResponse, UserResponse,
    },
};
use crate::AppState;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = RegisterResponse),
        (status = 400, description = "Validation failure or email already in use")
    ),
    tag = "users"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AuthError> {
    tracing::debug!("Registration attempt for {}", request.email);
    request.validate()?;

    let user = state.auth.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user,
        }),
    ))
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token and user projection", body = LoginResponse),
        (status = 400, description = "Validation failure or invalid credentials")
    ),
    tag = "users"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    request.validate()?;

    let (token, user) = state.auth.login(request).await?;
    Ok(Json(LoginResponse { token, user }))
}

/// Get the caller's own profile
#[utoipa::path(
    get,
    path = "/api/users/profile",
    responses(
        (status = 200, description = "User projection", body = UserResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "User no longer exists")
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<UserResponse>, AuthError> {
    let profile = state.auth.profile(user.user_id).await?;
    Ok(Json(profile))
}

/// Update the caller's own profile (name and email only)
#[utoipa::path(
    put,
    path = "/api/users/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated user projection", body = UpdateProfileResponse),
        (status = 400, description = "Validation failure or email already in use"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<UpdateProfileResponse>, AuthError> {
    request.validate()?;

    let updated = state.auth.update_profile(user.user_id, request).await?;
    Ok(Json(UpdateProfileResponse {
        message: "Profile updated successfully".to_string(),
        user: updated,
    }))
}

/// Delete the caller's own account
#[utoipa::path(
    delete,
    path = "/api/users/profile",
    responses(
        (status = 200, description = "Deletion confirmation", body = DeleteProfileResponse),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<DeleteProfileResponse>, AuthError> {
    state.auth.delete_account(user.user_id).await?;
    Ok(Json(DeleteProfileResponse {
        message: "User account deleted successfully".to_string(),
    }))
}
