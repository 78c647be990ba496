// tests/support/test_helpers.rs

//! Shared helpers for the integration test binaries.

#![allow(dead_code)]

use spinelauth::{User, generate_hash};
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness so it shows up on failure.
pub fn init_tracing() {
    // Ignore the error if another test already installed a subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// Builds a user whose digest is the hash of `password`.
pub fn user_with_password(username: &str, password: &str) -> User {
    User::new(username, generate_hash(password)).unwrap()
}
