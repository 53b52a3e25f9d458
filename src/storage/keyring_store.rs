//! System keyring store: each key is a separate keyring entry.

use super::KeyValueStore;
use crate::error::{AuthGateError, Result};
use tracing::{debug, error};

#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> Result<keyring::Entry> {
        keyring::Entry::new(&self.service, key).map_err(|e| {
            error!("Keyring error: {}", e);
            AuthGateError::Keyring(e.to_string())
        })
    }
}

impl KeyValueStore for KeyringStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => {
                debug!("No keyring entry for: {}", key);
                Ok(None)
            }
            Err(e) => Err(AuthGateError::Keyring(e.to_string())),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.entry(key)?
            .set_password(value)
            .map_err(|e| AuthGateError::Keyring(e.to_string()))
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(AuthGateError::Keyring(e.to_string())),
        }
    }
}
