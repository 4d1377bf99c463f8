// src/infrastructure/security/credential_store.rs
use crate::application::ports::credentials::{CredentialKey, CredentialProvider};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Process-local credential storage. The console shell seeds one per request
/// from headers and cookies.
#[derive(Default)]
pub struct MemoryCredentialStore {
    values: Mutex<HashMap<CredentialKey, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, key: CredentialKey, value: impl Into<String>) -> Self {
        self.set(key, value.into());
        self
    }

    fn values(&self) -> MutexGuard<'_, HashMap<CredentialKey, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CredentialProvider for MemoryCredentialStore {
    fn get(&self, key: CredentialKey) -> Option<String> {
        self.values().get(&key).cloned()
    }

    fn set(&self, key: CredentialKey, value: String) {
        self.values().insert(key, value);
    }

    fn clear(&self, key: CredentialKey) {
        self.values().remove(&key);
    }
}
