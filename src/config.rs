// src/config.rs

//! Loads seed users from a TOML file and turns them into validated [`User`] records.

use crate::core::auth::user::User;
use crate::core::auth::util::generate_hash;
use crate::core::errors::AuthError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use tracing::{info, warn};

/// One `[[users]]` entry. Exactly one of `password` or `hash` must be set.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UserEntry {
    pub username: String,
    /// Plaintext password, hashed when the entry is built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Pre-computed SHA-256 hex digest, stored verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// The seed users file (e.g., `users.toml`).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub users: Vec<UserEntry>,
}

impl AuthConfig {
    /// Reads and parses a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read users file at '{path}'"))?;
        Self::from_toml_str(&contents).with_context(|| format!("Invalid users file '{path}'"))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AuthConfig =
            toml::from_str(contents).context("Failed to parse TOML users document")?;
        Ok(config)
    }

    /// Builds every entry into a [`User`], in file order.
    ///
    /// Fails on the first entry with an invalid name, a missing or doubled
    /// credential, or a username already seen.
    pub fn build_users(&self) -> Result<Vec<User>, AuthError> {
        let mut seen = HashSet::with_capacity(self.users.len());
        let mut users = Vec::with_capacity(self.users.len());

        for entry in &self.users {
            if !seen.insert(entry.username.as_str()) {
                return Err(AuthError::DuplicateUser(entry.username.clone()));
            }
            users.push(entry.build()?);
        }

        info!("Loaded {} seed user(s)", users.len());
        Ok(users)
    }
}

impl UserEntry {
    fn build(&self) -> Result<User, AuthError> {
        let hash = match (&self.password, &self.hash) {
            (Some(password), None) => {
                warn!(
                    "User '{}' has a plaintext password in its configuration; prefer 'hash'",
                    self.username
                );
                generate_hash(password)
            }
            (None, Some(hash)) => hash.clone(),
            (Some(_), Some(_)) => {
                return Err(AuthError::InvalidConfig(format!(
                    "user '{}' sets both 'password' and 'hash'",
                    self.username
                )));
            }
            (None, None) => {
                return Err(AuthError::InvalidConfig(format!(
                    "user '{}' needs either 'password' or 'hash'",
                    self.username
                )));
            }
        };

        User::with_roles(self.username.as_str(), hash, self.roles.iter().cloned())
    }
}
