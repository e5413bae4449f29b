// Authentication service - business logic layer

use uuid::Uuid;

use crate::auth::{
    error::AuthError,
    models::{LoginRequest, RegisterRequest, UpdateProfileRequest, UserResponse},
    password::PasswordHasher,
    repository::UserRepository,
    token::TokenService,
};
use crate::config::AuthConfig;

/// Coordinates registration, login, and the profile lifecycle
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    hasher: PasswordHasher,
    tokens: TokenService,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(
        users: UserRepository,
        hasher: PasswordHasher,
        tokens: TokenService,
        config: AuthConfig,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
            config,
        }
    }

    /// Register a new user with the configured default role. The email
    /// pre-check and the unique index both map to `EmailTaken`, so a lost
    /// race produces the same conflict response.
    pub async fn register(&self, request: RegisterRequest) -> Result<UserResponse, AuthError> {
        if self.users.email_exists(&request.email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let user = self
            .users
            .create(
                &request.name,
                &request.email,
                &password_hash,
                self.config.default_role,
            )
            .await?;

        tracing::info!("Registered user {}", user.id);
        Ok(user.into())
    }

    /// Login. Unknown email and wrong password collapse into one
    /// `InvalidCredentials` so the response never reveals which part failed.
    pub async fn login(&self, request: LoginRequest) -> Result<(String, UserResponse), AuthError> {
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(&request.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id, user.role)?;
        tracing::info!("User {} logged in", user.id);
        Ok((token, user.into()))
    }

    /// Public-safe projection of the caller's own record
    pub async fn profile(&self, user_id: Uuid) -> Result<UserResponse, AuthError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        Ok(user.into())
    }

    /// Patch the caller's profile. Only the allow-listed fields (name, email)
    /// are mutable here.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<UserResponse, AuthError> {
        let user = self
            .users
            .update_profile(user_id, request.name.as_deref(), request.email.as_deref())
            .await?
            .ok_or(AuthError::UserNotFound)?;

        tracing::info!("Updated profile for user {}", user_id);
        Ok(user.into())
    }

    /// Delete the caller's account. Immediate and irreversible; tokens
    /// already issued stay valid until they expire.
    pub async fn delete_account(&self, user_id: Uuid) -> Result<(), AuthError> {
        if !self.users.delete(user_id).await? {
            return Err(AuthError::UserNotFound);
        }
        tracing::info!("Deleted account {}", user_id);
        Ok(())
    }
}
