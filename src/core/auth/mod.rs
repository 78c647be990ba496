// src/core/auth/mod.rs

//! User credential records and the primitives they are built on.

pub mod user;
pub mod util;

pub use user::{SafeUser, User};
pub use util::{compare_hash_and_password, generate_hash, validate_name};
