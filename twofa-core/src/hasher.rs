//! hasher.rs - Hashing of verification codes at rest.
//!
//! Codes are stored hashed, never in plaintext; the plaintext exists only in
//! the value returned to the issuance caller. The `CodeHasher` trait keeps
//! the hashing scheme swappable; the default implementation uses Argon2 with
//! a per-code random salt.
//!
//! License: MIT OR Apache-2.0

use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

use crate::errors::TwoFactorError;

/// A trait for hashing verification codes and checking submissions against
/// a stored hash.
pub trait CodeHasher: Send + Sync {
    /// Hashes a plaintext code for storage.
    fn hash(&self, code: &str) -> Result<String, TwoFactorError>;

    /// Checks a submitted code against a stored hash.
    fn verify(&self, code: &str, stored_hash: &str) -> bool;
}

/// The default `CodeHasher`: Argon2id in its default configuration.
#[derive(Debug, Default)]
pub struct Argon2Hasher;

impl CodeHasher for Argon2Hasher {
    fn hash(&self, code: &str) -> Result<String, TwoFactorError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(code.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| TwoFactorError::Hash(e.to_string()))
    }

    fn verify(&self, code: &str, stored_hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(code.as_bytes(), &parsed)
            .is_ok()
    }
}
