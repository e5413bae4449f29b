// Auth gate: bearer-token extraction for protected routes

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::auth::{
    error::AuthError,
    models::Role,
    token::{Claims, TokenService},
};

/// Identity bound to the request after the auth gate. Handlers taking this
/// extractor never run without a verified token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: Role,
}

/// Pull `Authorization: Bearer <token>` out of the headers and verify it.
/// Runs before any handler logic, so a rejected request never touches the
/// store.
fn bearer_claims(headers: &HeaderMap, tokens: &TokenService) -> Result<Claims, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidToken)?;

    tokens.verify(token)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    TokenService: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let tokens = TokenService::from_ref(state);
        let claims = bearer_claims(&parts.headers, &tokens)?;

        debug!("Authenticated user {} ({})", claims.sub, claims.role);
        Ok(AuthenticatedUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}

/// Route-layer guard for the admin surface: same bearer extraction, plus a
/// role equality check before the handler runs.
pub async fn require_admin(
    State(tokens): State<TokenService>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let endpoint = request.uri().path().to_string();

    let claims = bearer_claims(request.headers(), &tokens).map_err(|e| {
        warn!("Rejected unauthenticated request to {}", endpoint);
        e
    })?;

    if claims.role != Role::Admin {
        warn!(
            "Authorization failed: user_id={}, role={}, endpoint={}",
            claims.sub, claims.role, endpoint
        );
        return Err(AuthError::InsufficientRole {
            required: Role::Admin,
            actual: claims.role,
        });
    }

    debug!(
        "Admin access granted: user_id={}, endpoint={}",
        claims.sub, endpoint
    );
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;
    use axum::{middleware, routing::get, Router};
    use axum_test::TestServer;

    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes".to_string(), 3600)
    }

    fn parts_with_auth(auth_value: &str) -> Parts {
        let req = HttpRequest::builder()
            .uri("/")
            .header(header::AUTHORIZATION, auth_value)
            .body(())
            .unwrap();
        let (parts, _) = req.into_parts();
        parts
    }

    fn parts_without_auth() -> Parts {
        let req = HttpRequest::builder().uri("/").body(()).unwrap();
        let (parts, _) = req.into_parts();
        parts
    }

    #[tokio::test]
    async fn test_valid_token_is_accepted() {
        let tokens = test_token_service();
        let user_id = Uuid::new_v4();
        let token = tokens.issue(user_id, Role::Student).unwrap();

        let mut parts = parts_with_auth(&format!("Bearer {}", token));
        let user = AuthenticatedUser::from_request_parts(&mut parts, &tokens)
            .await
            .unwrap();

        assert_eq!(user.user_id, user_id);
        assert_eq!(user.role, Role::Student);
    }

    #[tokio::test]
    async fn test_missing_authorization_header_is_rejected() {
        let tokens = test_token_service();
        let mut parts = parts_without_auth();

        let result = AuthenticatedUser::from_request_parts(&mut parts, &tokens).await;
        assert!(matches!(result, Err(AuthError::MissingToken)));
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_rejected() {
        let tokens = test_token_service();

        for auth_value in ["Basic dXNlcjpwYXNz", "token_without_scheme", "bearer x"] {
            let mut parts = parts_with_auth(auth_value);
            let result = AuthenticatedUser::from_request_parts(&mut parts, &tokens).await;
            assert!(matches!(result, Err(AuthError::InvalidToken)));
        }
    }

    #[tokio::test]
    async fn test_token_from_other_secret_is_rejected() {
        let foreign = TokenService::new("some_other_secret".to_string(), 3600);
        let token = foreign.issue(Uuid::new_v4(), Role::Admin).unwrap();

        let tokens = test_token_service();
        let mut parts = parts_with_auth(&format!("Bearer {}", token));
        let result = AuthenticatedUser::from_request_parts(&mut parts, &tokens).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    fn admin_gated_router(tokens: TokenService) -> Router {
        Router::new()
            .route("/admin/ping", get(|| async { "pong" }))
            .layer(middleware::from_fn_with_state(tokens, require_admin))
    }

    #[tokio::test]
    async fn test_admin_guard_allows_admin() {
        let tokens = test_token_service();
        let token = tokens.issue(Uuid::new_v4(), Role::Admin).unwrap();
        let server = TestServer::new(admin_gated_router(tokens)).unwrap();

        let response = server
            .get("/admin/ping")
            .add_header(
                header::AUTHORIZATION,
                format!("Bearer {}", token).parse().unwrap(),
            )
            .await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_admin_guard_denies_student() {
        let tokens = test_token_service();
        let token = tokens.issue(Uuid::new_v4(), Role::Student).unwrap();
        let server = TestServer::new(admin_gated_router(tokens)).unwrap();

        let response = server
            .get("/admin/ping")
            .add_header(
                header::AUTHORIZATION,
                format!("Bearer {}", token).parse().unwrap(),
            )
            .await;
        assert_eq!(response.status_code(), axum::http::StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_admin_guard_denies_missing_token() {
        let tokens = test_token_service();
        let server = TestServer::new(admin_gated_router(tokens)).unwrap();

        let response = server.get("/admin/ping").await;
        assert_eq!(response.status_code(), axum::http::StatusCode::UNAUTHORIZED);
    }
}
