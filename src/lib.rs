// src/lib.rs

pub mod config;
pub mod core;

// Re-export
pub use crate::core::auth::{generate_hash, validate_name};
pub use crate::core::{AuthError, SafeUser, User};
