//! Password hashing behind an injectable interface.
//!
//! The service only ever sees the trait, so tests can substitute a stub
//! and the hashing algorithm stays swappable.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordVerifier, SaltString},
    Argon2, PasswordHasher as Argon2PasswordHasher,
};

use crate::errors::{AppError, AppResult};

/// One-way password hashing collaborator.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain text password for storage.
    fn hash(&self, plain_text: &str) -> AppResult<String>;

    /// Verify a plain text password against a stored hash.
    ///
    /// A malformed stored hash counts as a mismatch.
    fn verify(&self, plain_text: &str, hash: &str) -> bool;
}

/// Argon2 implementation of [`PasswordHasher`].
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(plain_text.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))
    }

    fn verify(&self, plain_text: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        self.argon2
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }
}
