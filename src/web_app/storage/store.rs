// web_app/storage/store.rs - Key/value store backends
//
// The catalog only ever needs string slots: read one, replace one,
// drop one. Serialization happens a layer up in the repository.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::StoreError;

/// A string key/value store with whole-value reads and writes
pub trait KeyValueStore {
    /// Read the value under `key`. `Ok(None)` when the slot is empty.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process store
///
/// Mirrors the failure modes of browser storage: an optional byte quota
/// over the sum of all keys and values, and an "unavailable" switch.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit total stored bytes (keys + values)
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Start with a value already in `key`
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.lock().insert(key.to_string(), value.to_string());
        self
    }

    /// Make every operation fail with `StoreError::Unavailable`
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    pub fn set_quota(&mut self, bytes: Option<usize>) {
        self.quota = bytes;
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still consistent: every write is a single insert
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_available()?;
        Ok(self.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_available()?;
        let mut slots = self.lock();

        if let Some(limit) = self.quota {
            let others: usize = slots
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > limit {
                return Err(StoreError::QuotaExceeded { needed, limit });
            }
        }

        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.check_available()?;
        self.lock().remove(key);
        Ok(())
    }
}

cfg_if::cfg_if! {
    if #[cfg(any(feature = "ssr", feature = "hydrate"))] {
        /// `window.localStorage`
        ///
        /// Looked up on every call, so constructing one is free and safe during
        /// server rendering. Calls must only happen in the browser (effects and
        /// event handlers).
        #[derive(Clone, Copy, Debug, Default)]
        pub struct BrowserStore;

        impl BrowserStore {
            fn storage(&self) -> Result<web_sys::Storage, StoreError> {
                let window = web_sys::window().ok_or(StoreError::Unavailable)?;
                window
                    .local_storage()
                    .ok()
                    .flatten()
                    .ok_or(StoreError::Unavailable)
            }
        }

        impl KeyValueStore for BrowserStore {
            fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
                self.storage()?
                    .get_item(key)
                    .map_err(|_| StoreError::Unavailable)
            }

            fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
                self.storage()?
                    .set_item(key, value)
                    .map_err(|e| StoreError::WriteRejected(format!("{:?}", e)))
            }

            fn remove_item(&self, key: &str) -> Result<(), StoreError> {
                self.storage()?
                    .remove_item(key)
                    .map_err(|e| StoreError::WriteRejected(format!("{:?}", e)))
            }
        }
    }
}
