// src/core/auth/util.rs

//! Password digests and username validation.

use crate::core::errors::AuthError;
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("username pattern is a valid regex")
});

/// Computes the SHA-256 digest of `password` and returns it as 64 lowercase hex characters.
///
/// This is a single unsalted pass. Identical passwords always produce identical digests.
pub fn generate_hash(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    hex::encode(digest)
}

/// Checks `password` against a digest previously produced by [`generate_hash`].
pub fn compare_hash_and_password(hash: &str, password: &str) -> Result<(), AuthError> {
    // Plain string equality, not constant-time.
    if hash == generate_hash(password) {
        Ok(())
    } else {
        Err(AuthError::PasswordMismatch)
    }
}

/// Succeeds if `name` starts with an ASCII letter followed only by ASCII letters, digits or `_`.
pub fn validate_name(name: &str) -> Result<(), AuthError> {
    if NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(AuthError::InvalidName)
    }
}
