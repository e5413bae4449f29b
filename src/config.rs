// Process configuration
// Everything is read from the environment exactly once at startup; the rest
// of the application receives these structs through AppState.

use std::time::Duration;

use crate::auth::models::Role;

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Per-request timeout budget around the whole handler chain
    pub request_timeout: Duration,
    pub auth: AuthConfig,
}

/// Authentication configuration shared with the token service and
/// the registration flow
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
    pub default_role: Role,
}

impl AppConfig {
    /// Build the configuration from environment variables.
    /// DATABASE_URL and JWT_SECRET are required; everything else has a default.
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set in environment".to_string())?;
        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET must be set in environment".to_string())?;

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| "PORT must be a valid port number".to_string())?;

        let request_timeout_secs = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .map_err(|_| "REQUEST_TIMEOUT_SECS must be a positive integer".to_string())?;

        // Tokens live for one hour unless overridden
        let token_ttl_secs = std::env::var("TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse::<i64>()
            .map_err(|_| "TOKEN_TTL_SECS must be a positive integer".to_string())?;

        Ok(Self {
            host,
            port,
            database_url,
            request_timeout: Duration::from_secs(request_timeout_secs),
            auth: AuthConfig {
                jwt_secret,
                token_ttl_secs,
                default_role: Role::Student,
            },
        })
    }
}
