// Password hashing with Argon2id

use argon2::{
    password_hash::{rand_core::OsRng, Error as HashError, SaltString},
    Argon2, Params, PasswordHash, PasswordVerifier,
};

use crate::auth::error::AuthError;

/// Argon2id hasher with tunable cost parameters.
/// Defaults follow the current OWASP minimum (m=19456 KiB, t=2, p=1).
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new(params: Params) -> Self {
        Self {
            argon2: Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params),
        }
    }

    /// Hash a password. Every call draws a fresh random salt, so hashing the
    /// same plaintext twice yields different digests.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let digest = argon2::PasswordHasher::hash_password(&self.argon2, password.as_bytes(), &salt)
            .map_err(|_| AuthError::PasswordHashError)?;
        Ok(digest.to_string())
    }

    /// Verify a password against a stored digest. The salt and cost
    /// parameters come from the digest itself; the comparison inside the
    /// argon2 crate is constant-time.
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(digest).map_err(|_| AuthError::PasswordHashError)?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(_) => Err(AuthError::PasswordHashError),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        let params = Params::new(19_456, 2, 1, None).expect("default argon2 params are valid");
        Self::new(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Light parameters so the suite stays fast; the contract is identical.
    fn test_hasher() -> PasswordHasher {
        PasswordHasher::new(Params::new(64, 1, 1, None).unwrap())
    }

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hasher = test_hasher();
        let digest = hasher.hash("Abc123!@").unwrap();
        assert!(hasher.verify("Abc123!@", &digest).unwrap());
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let hasher = test_hasher();
        let digest = hasher.hash("Abc123!@").unwrap();
        assert!(!hasher.verify("Abc123!#", &digest).unwrap());
        assert!(!hasher.verify("", &digest).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hasher = test_hasher();
        let first = hasher.hash("Abc123!@").unwrap();
        let second = hasher.hash("Abc123!@").unwrap();
        assert_ne!(first, second, "fresh salt per call must change the digest");

        // Both digests still verify
        assert!(hasher.verify("Abc123!@", &first).unwrap());
        assert!(hasher.verify("Abc123!@", &second).unwrap());
    }

    #[test]
    fn test_garbage_digest_is_an_error_not_a_match() {
        let hasher = test_hasher();
        assert!(hasher.verify("Abc123!@", "not-a-phc-string").is_err());
    }
}
