//! Authentication for AuthGate.
//!
//! Credentials are checked against a static directory of demo accounts. A
//! successful login sets the session flag and writes it, together with the
//! user's profile, to durable storage so a restarted process stays signed in.

pub mod credentials;
pub mod directory;
pub mod service;

pub use credentials::{Credentials, UserProfile};
pub use directory::CredentialDirectory;
pub use service::AuthService;
