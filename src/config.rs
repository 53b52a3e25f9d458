//! Compile-time defaults.

use std::path::PathBuf;

pub const APP_NAME: &str = "authgate";

/// Durable key holding the literal `"true"` while a session is active.
pub const SESSION_FLAG_KEY: &str = "isAuthenticated";
/// Durable key holding the JSON-encoded stored profile.
pub const STORED_PROFILE_KEY: &str = "user";
pub const SESSION_FLAG_VALUE: &str = "true";

/// Simulated round-trip latency for `login`, in milliseconds.
pub const LOGIN_LATENCY_MS: u64 = 500;

pub const STORAGE_FILE: &str = "storage.json";
pub const KEYRING_SERVICE: &str = "AuthGate";

/// Default directory for the file-backed store.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}
