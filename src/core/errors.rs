// src/core/errors.rs

//! Defines the error type shared by every credential operation.

use thiserror::Error;

/// All failures a credential operation can report to its caller.
///
/// Variants carry strings instead of source errors so the enum stays `Clone`
/// and comparable, which callers rely on when matching authentication results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid name: must start with a letter and contain only letters, digits or '_'")]
    InvalidName,

    #[error("WRONGPASS invalid password")]
    PasswordMismatch,

    #[error("JSON deserialization error: {0}")]
    Deserialization(String),

    #[error("JSON serialization error: {0}")]
    Serialization(String),

    #[error("duplicate user '{0}'")]
    DuplicateUser(String),

    #[error("invalid user configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for AuthError {
    fn from(e: serde_json::Error) -> Self {
        AuthError::Deserialization(e.to_string())
    }
}
