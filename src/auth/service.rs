//! Authentication service owning the session flag and its durable copy.

use super::credentials::{Credentials, UserProfile};
use super::directory::CredentialDirectory;
use crate::config::{
    LOGIN_LATENCY_MS, SESSION_FLAG_KEY, SESSION_FLAG_VALUE, STORED_PROFILE_KEY,
};
use crate::error::Result;
use crate::storage::KeyValueStore;
use std::time::Duration;
use tracing::{debug, error, info};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials. Please try again.";

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub succeeded: bool,
    /// User-facing message for the form
    pub message: String,
    /// Present only when `succeeded` is true
    pub profile: Option<UserProfile>,
}

impl AuthResponse {
    fn success(profile: UserProfile) -> Self {
        Self {
            succeeded: true,
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
            profile: Some(profile),
        }
    }

    fn invalid_credentials() -> Self {
        Self {
            succeeded: false,
            message: INVALID_CREDENTIALS_MESSAGE.to_string(),
            profile: None,
        }
    }
}

/// Holds the process-wide session flag and mirrors it into durable storage.
///
/// One instance is built at startup and shared by the login form and the
/// router. `login` and `logout` take `&mut self`, so the flag and its two
/// durable keys always change together.
#[derive(Debug)]
pub struct AuthService {
    directory: CredentialDirectory,
    storage: Box<dyn KeyValueStore>,
    authenticated: bool,
    latency: Duration,
}

impl AuthService {
    /// Create a service over the given directory and store.
    pub fn new(directory: CredentialDirectory, storage: Box<dyn KeyValueStore>) -> Self {
        Self {
            directory,
            storage,
            authenticated: false,
            latency: Duration::from_millis(LOGIN_LATENCY_MS),
        }
    }

    /// Override the simulated login latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Verify `credentials` and start a session on success.
    ///
    /// Waits for the simulated latency first. Rejected credentials leave the
    /// session and storage untouched and are reported in the response.
    ///
    /// # Errors
    /// Returns error if the durable store cannot be written.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<AuthResponse> {
        debug!("Login attempt for: {}", credentials.identifier);
        tokio::time::sleep(self.latency).await;

        let Some(record) = self.directory.lookup(credentials) else {
            info!("Rejected credentials for: {}", credentials.identifier);
            return Ok(AuthResponse::invalid_credentials());
        };
        let profile = record.profile();

        self.persist_session(&profile)?;
        self.authenticated = true;

        info!("Login successful for: {}", profile.identifier);
        Ok(AuthResponse::success(profile))
    }

    /// Write the flag and profile as a pair.
    ///
    /// If the profile write fails after the flag was written, both keys are
    /// cleared, along with the in-memory flag, so storage never holds only
    /// one of them.
    fn persist_session(&mut self, profile: &UserProfile) -> Result<()> {
        let serialized = serde_json::to_string(profile)?;

        self.storage.set_item(SESSION_FLAG_KEY, SESSION_FLAG_VALUE)?;
        if let Err(e) = self.storage.set_item(STORED_PROFILE_KEY, &serialized) {
            error!("Failed to store profile, clearing session: {}", e);
            self.authenticated = false;
            if let Err(rollback) = self.clear_session_keys() {
                error!("Failed to clear session after partial write: {}", rollback);
            }
            return Err(e);
        }
        Ok(())
    }

    /// Remove both durable keys, attempting each even if the other fails.
    ///
    /// Returns the first error encountered.
    fn clear_session_keys(&mut self) -> Result<()> {
        let flag = self.storage.remove_item(SESSION_FLAG_KEY);
        let profile = self.storage.remove_item(STORED_PROFILE_KEY);
        flag.and(profile)
    }

    /// End the session and clear both durable keys. Safe to call repeatedly.
    ///
    /// # Errors
    /// Returns error if the durable store cannot be written. Both keys are
    /// still attempted.
    pub fn logout(&mut self) -> Result<()> {
        self.authenticated = false;
        self.clear_session_keys()?;
        info!("Logged out");
        Ok(())
    }

    /// True if this instance logged in, or the durable flag says a previous
    /// instance did.
    ///
    /// The durable read is what lets a freshly started process recover its
    /// session. The in-memory flag is never re-synced from storage.
    ///
    /// # Errors
    /// Returns error if the durable store cannot be read.
    pub fn is_authenticated(&self) -> Result<bool> {
        if self.authenticated {
            return Ok(true);
        }
        let stored = self.storage.get_item(SESSION_FLAG_KEY)?;
        Ok(stored.as_deref() == Some(SESSION_FLAG_VALUE))
    }

    /// The stored profile of the signed-in user, if any.
    pub fn current_user(&self) -> Result<Option<UserProfile>> {
        match self.storage.get_item(STORED_PROFILE_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}
