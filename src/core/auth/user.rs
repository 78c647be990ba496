// src/core/auth/user.rs

use crate::core::auth::util::{compare_hash_and_password, validate_name};
use crate::core::errors::AuthError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// A single user: a validated name, a password digest and a set of role keys.
///
/// The name is checked on every construction path, so a `User` value always
/// holds a valid username. `Clone` copies the role set; clones never share it.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "JsonUser")]
pub struct User {
    username: String,
    hash: String,
    role_keys: BTreeSet<String>,
}

/// The on-the-wire shape of a [`User`].
///
/// Roles travel as a sorted array so that serializing the same user always
/// yields the same document.
#[derive(Serialize, Deserialize)]
struct JsonUser {
    #[serde(default)]
    username: String,
    #[serde(default)]
    hash: String,
    #[serde(rename = "roles", default, deserialize_with = "null_as_empty")]
    role_keys: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&User> for JsonUser {
    fn from(user: &User) -> Self {
        JsonUser {
            username: user.username.clone(),
            hash: user.hash.clone(),
            role_keys: user.role_keys.iter().cloned().collect(),
        }
    }
}

impl TryFrom<JsonUser> for User {
    type Error = AuthError;

    fn try_from(json: JsonUser) -> Result<Self, Self::Error> {
        User::with_roles(json.username, json.hash, json.role_keys)
    }
}

impl Serialize for User {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        JsonUser::from(self).serialize(serializer)
    }
}

/// A user without its password digest, safe to hand out in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeUser {
    pub username: String,
    /// Sorted ascending, no duplicates.
    #[serde(rename = "roles")]
    pub role_keys: Vec<String>,
}

impl From<&User> for SafeUser {
    fn from(user: &User) -> Self {
        SafeUser {
            username: user.username.clone(),
            role_keys: user.role_keys.iter().cloned().collect(),
        }
    }
}

impl User {
    /// Creates a user with no roles.
    ///
    /// `hash` is stored verbatim; it is expected to come from
    /// [`generate_hash`](crate::core::auth::util::generate_hash).
    pub fn new(username: impl Into<String>, hash: impl Into<String>) -> Result<Self, AuthError> {
        Self::with_roles(username, hash, std::iter::empty::<String>())
    }

    /// Creates a user with an initial role set. Duplicate roles collapse.
    pub fn with_roles<I, R>(
        username: impl Into<String>,
        hash: impl Into<String>,
        roles: I,
    ) -> Result<Self, AuthError>
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        let username: String = username.into();
        if let Err(e) = validate_name(&username) {
            debug!("Rejected username {:?}", username);
            return Err(e);
        }

        Ok(User {
            username,
            hash: hash.into(),
            role_keys: roles.into_iter().map(Into::into).collect(),
        })
    }

    /// Parses a `{"username", "hash", "roles"}` document and validates the username.
    pub fn from_json(document: &str) -> Result<Self, AuthError> {
        let json: JsonUser = serde_json::from_str(document).map_err(|e| {
            debug!("Failed to parse user document: {}", e);
            AuthError::from(e)
        })?;
        User::try_from(json)
    }

    /// Serializes to the wire form with roles sorted ascending.
    pub fn to_json(&self) -> Result<String, AuthError> {
        serde_json::to_string(&JsonUser::from(self))
            .map_err(|e| AuthError::Serialization(e.to_string()))
    }

    /// Returns the digest-free projection of this user.
    pub fn safe_user(&self) -> SafeUser {
        SafeUser::from(self)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Read-only view of the role set. Use [`add_role`](Self::add_role) and
    /// [`remove_role`](Self::remove_role) to change it.
    pub fn role_keys(&self) -> &BTreeSet<String> {
        &self.role_keys
    }

    /// Exact, case-sensitive membership test.
    pub fn has_role(&self, name: &str) -> bool {
        self.role_keys.contains(name)
    }

    /// Returns `true` if the role was not present before.
    pub fn add_role(&mut self, role: impl Into<String>) -> bool {
        self.role_keys.insert(role.into())
    }

    /// Returns `true` if the role was present.
    pub fn remove_role(&mut self, role: &str) -> bool {
        self.role_keys.remove(role)
    }

    /// Checks `candidate` against the stored digest.
    pub fn compare_password(&self, candidate: &str) -> Result<(), AuthError> {
        compare_hash_and_password(&self.hash, candidate).inspect_err(|_| {
            debug!("Password mismatch for user '{}'", self.username);
        })
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("hash", &"<redacted>")
            .field("role_keys", &self.role_keys)
            .finish()
    }
}
