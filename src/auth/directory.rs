//! Static directory of known accounts.

use super::credentials::{Credentials, IdentityRecord};

/// Read-only list of identity records consulted by `login`.
#[derive(Debug, Clone)]
pub struct CredentialDirectory {
    records: Vec<IdentityRecord>,
}

impl CredentialDirectory {
    pub fn new(records: Vec<IdentityRecord>) -> Self {
        Self { records }
    }

    /// The demo directory shipped with the application.
    pub fn builtin() -> Self {
        Self::new(vec![IdentityRecord::new(
            "admin",
            "admin@1234",
            "Administrator",
        )])
    }

    /// First record whose identifier and secret both match exactly.
    ///
    /// Matching is case-sensitive with no trimming; an empty submission
    /// simply finds nothing.
    pub fn find(&self, identifier: &str, secret: &str) -> Option<&IdentityRecord> {
        self.records
            .iter()
            .find(|r| r.identifier == identifier && r.secret == secret)
    }

    pub fn lookup(&self, credentials: &Credentials) -> Option<&IdentityRecord> {
        self.find(&credentials.identifier, &credentials.secret)
    }
}

impl Default for CredentialDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}
