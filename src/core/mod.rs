// src/core/mod.rs

//! The central module containing the credential types of SpinelAuth.

pub mod auth;
pub mod errors;

pub use auth::{SafeUser, User};
pub use errors::AuthError;
