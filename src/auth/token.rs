// JWT issuance and verification

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{error::AuthError, models::Role};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies HS256-signed identity tokens. Stateless: nothing is
/// persisted, so a token stays valid for its full ttl even if the account is
/// deleted or its role changes in the meantime.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(secret: String, ttl_secs: i64) -> Self {
        Self { secret, ttl_secs }
    }

    /// Issue a token bound to a user id and role, expiring after the
    /// configured ttl.
    pub fn issue(&self, subject: Uuid, role: Role) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject,
            role,
            iat: now,
            exp: now + self.ttl_secs,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenIssueError(e.to_string()))
    }

    /// Verify signature and expiry. Every failure collapses to
    /// `AuthError::InvalidToken`; the concrete decode error is only logged.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!("Token rejected: {}", e);
            AuthError::InvalidToken
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes".to_string(), 3600)
    }

    #[test]
    fn test_issue_then_verify_returns_subject_and_role() {
        let service = test_token_service();
        let subject = Uuid::new_v4();

        let token = service.issue(subject, Role::Instructor).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, subject);
        assert_eq!(claims.role, Role::Instructor);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Hand-build an already-expired token signed with the right secret
        let claims = Claims {
            sub: Uuid::new_v4(),
            role: Role::Student,
            iat: Utc::now().timestamp() - 1000,
            exp: Utc::now().timestamp() - 500,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test_secret_key_for_testing_purposes".as_bytes()),
        )
        .unwrap();

        let service = test_token_service();
        assert!(matches!(
            service.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_foreign_secret_is_rejected() {
        let issuer = TokenService::new("secret_one".to_string(), 3600);
        let verifier = TokenService::new("secret_two".to_string(), 3600);

        let token = issuer.issue(Uuid::new_v4(), Role::Student).unwrap();

        assert!(issuer.verify(&token).is_ok());
        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        let service = test_token_service();

        assert!(service.verify("").is_err());
        assert!(service.verify("not.a.token").is_err());
        assert!(service.verify("single_segment").is_err());
        assert!(service
            .verify("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.invalid.signature")
            .is_err());
    }

    proptest! {
        #[test]
        fn prop_roundtrip_preserves_identity(
            subject in proptest::array::uniform16(any::<u8>()),
            ttl in 60i64..86_400
        ) {
            let service = TokenService::new("prop_secret".to_string(), ttl);
            let subject = Uuid::from_bytes(subject);

            let token = service.issue(subject, Role::Student)?;
            let claims = service.verify(&token)?;

            prop_assert_eq!(claims.sub, subject);
            prop_assert_eq!(claims.role, Role::Student);
            prop_assert_eq!(claims.exp - claims.iat, ttl);
        }

        #[test]
        fn prop_random_strings_rejected(malformed in "[a-zA-Z0-9]{10,50}") {
            let service = test_token_service();
            prop_assert!(service.verify(&malformed).is_err());
        }
    }
}
