//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`DurableStorage`] used on the **web platform**. Entries
//! live in `window.localStorage`, so they survive a page reload and are dropped
//! only when removed explicitly (or when the user clears site data).
//!
//! `localStorage` has no transactions. [`LocalStorage::write`] snapshots the
//! previous values first and restores them if a later `setItem` fails (quota
//! exceeded, storage disabled), so a token is never left behind without its role.

use tracing::warn;

use crate::error::StorageError;
use crate::storage::DurableStorage;

/// `window.localStorage`-backed storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl DurableStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn write(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let storage = self.storage()?;
        let previous: Vec<Option<String>> = entries
            .iter()
            .map(|(key, _)| storage.get_item(key).ok().flatten())
            .collect();

        for (written, (key, value)) in entries.iter().enumerate() {
            if let Err(e) = storage.set_item(key, value) {
                warn!(key, "localStorage write failed, restoring previous entries");
                for ((key, _), old) in entries.iter().zip(&previous).take(written) {
                    let restored = match old {
                        Some(old) => storage.set_item(key, old),
                        None => storage.remove_item(key),
                    };
                    if let Err(e) = restored {
                        warn!(key, error = ?e, "could not restore previous localStorage entry");
                    }
                }
                return Err(StorageError::Unavailable(format!("{e:?}")));
            }
        }
        Ok(())
    }

    fn remove(&self, keys: &[&str]) -> Result<(), StorageError> {
        let storage = self.storage()?;
        for key in keys {
            storage
                .remove_item(key)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?;
        }
        Ok(())
    }
}
