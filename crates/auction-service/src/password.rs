//! Password hashing using Argon2.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Argon2, Params,
};
use auction_core::{AuctionError, AuctionResult};
use std::sync::Arc;
use tracing::debug;

/// Shortest accepted plain-text password.
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Longest accepted plain-text password.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Argon2id password hasher.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Arc<Argon2<'static>>,
}

impl PasswordHasher {
    /// Creates a new password hasher with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(Params::DEFAULT)
    }

    /// Creates a new password hasher with custom parameters.
    #[must_use]
    pub fn with_params(params: Params) -> Self {
        let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);
        Self {
            argon2: Arc::new(argon2),
        }
    }

    /// Creates a password hasher from a memory cost in MiB.
    #[must_use]
    pub fn with_cost(cost: u32) -> Self {
        let params = Params::new(cost * 1024, 3, 1, None).unwrap_or(Params::DEFAULT);
        Self::with_params(params)
    }

    /// Hashes a password with a fresh salt.
    ///
    /// # Errors
    ///
    /// Returns [`AuctionError::Internal`] if hashing fails.
    pub fn hash(&self, password: &str) -> AuctionResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuctionError::Internal(format!("Failed to hash password: {}", e)))?;

        debug!("Password hashed successfully");
        Ok(hash.to_string())
    }

    /// Verifies a password against a PHC-format hash.
    ///
    /// # Errors
    ///
    /// Returns [`AuctionError::Internal`] if the stored hash is malformed.
    pub fn verify(&self, password: &str, hash: &str) -> AuctionResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AuctionError::Internal(format!("Invalid password hash format: {}", e)))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => {
                debug!("Password verification failed: incorrect password");
                Ok(false)
            }
            Err(e) => Err(AuctionError::Internal(format!(
                "Password verification error: {}",
                e
            ))),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}

/// Checks the length bounds of a plain-text password.
///
/// # Errors
///
/// Returns [`AuctionError::Validation`] naming the violated bound.
pub fn validate_password(password: &str) -> AuctionResult<()> {
    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(AuctionError::validation(format!(
            "password: must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(AuctionError::validation(format!(
            "password: must be at most {} characters",
            MAX_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::with_cost(1);
        let hash = hasher.hash("correct horse").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("correct horse", &hash).unwrap());
        assert!(!hasher.verify("wrong horse", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ() {
        let hasher = PasswordHasher::with_cost(1);
        let first = hasher.hash("same password").unwrap();
        let second = hasher.hash("same password").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_error() {
        let hasher = PasswordHasher::with_cost(1);
        assert!(matches!(
            hasher.verify("password", "not-a-valid-hash"),
            Err(AuctionError::Internal(_))
        ));
    }

    #[test]
    fn test_password_length_bounds() {
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }
}
