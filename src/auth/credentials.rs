//! Credential and identity types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A login attempt as typed into the form. Never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Login identifier (the "email" field, which may hold a plain username)
    pub identifier: String,
    /// Secret compared verbatim against the directory
    pub secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// A known account in the credential directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    pub identifier: String,
    pub secret: String,
    pub display_name: String,
}

impl IdentityRecord {
    pub fn new(
        identifier: impl Into<String>,
        secret: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
            display_name: display_name.into(),
        }
    }

    /// The public part of the record, without the secret.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            identifier: self.identifier.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

/// Profile of the signed-in user, persisted under the `user` key as
/// `{"email": ..., "name": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "email")]
    pub identifier: String,
    #[serde(rename = "name")]
    pub display_name: String,
}
