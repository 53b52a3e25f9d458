//! Durable key-value storage for the session.
//!
//! The authentication service mirrors its session flag and stored profile
//! into a [`KeyValueStore`]. Three backends are provided: a JSON file on disk,
//! the system keyring, and a process-local map.

pub mod file;
pub mod keyring_store;
pub mod memory;

pub use file::FileStore;
pub use keyring_store::KeyringStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// String key-value storage that outlives the process (except [`MemoryStore`]).
///
/// Every operation can fail; callers must propagate the error instead of
/// reading a failure as an absent key.
pub trait KeyValueStore: std::fmt::Debug + Send {
    /// Read the value stored under `key`, `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}
