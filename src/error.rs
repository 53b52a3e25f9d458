//! Error types for AuthGate.

use thiserror::Error;

/// Errors surfaced by storage, session and terminal operations.
///
/// Rejected credentials are not an error: `login` reports them through
/// [`crate::auth::service::AuthResponse`].
#[derive(Debug, Error)]
pub enum AuthGateError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("keyring error: {0}")]
    Keyring(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("navigation did not settle after {0} redirects")]
    RedirectLoop(usize),
}

pub type Result<T> = std::result::Result<T, AuthGateError>;
