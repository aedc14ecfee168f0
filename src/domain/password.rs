//! Password value object - Domain layer password handling.
//!
//! Encapsulates Argon2 hashing and verification for account passwords.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

/// Hashed password. Only the PHC-format hash is ever held.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain text password with a fresh random salt.
    ///
    /// # Errors
    /// Returns a validation error for an empty password, or an internal
    /// error if the hasher fails.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if plain_text.is_empty() {
            return Err(AppError::validation("Password must not be empty"));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap a hash loaded from the database.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// A malformed stored hash never verifies.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::debug!("Stored password hash is malformed: {}", e);
                false
            }
        }
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let password = Password::new("admin123").unwrap();

        assert!(password.verify("admin123"));
        assert!(!password.verify("wrong"));
    }

    #[test]
    fn test_password_from_hash() {
        let hash = Password::new("s3cret").unwrap().into_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify("s3cret"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let first = Password::new("same").unwrap();
        let second = Password::new("same").unwrap();

        assert_ne!(first.as_str(), second.as_str());
        assert!(first.verify("same"));
        assert!(second.verify("same"));
    }

    #[test]
    fn test_empty_password_rejected() {
        assert!(Password::new("").is_err());
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let password = Password::from_hash("not-a-phc-string".to_string());
        assert!(!password.verify("anything"));
    }
}
