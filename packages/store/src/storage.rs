//! # Durable key/value storage
//!
//! The session survives a reload because it is written to storage that outlives
//! the running app. [`DurableStorage`] is the seam between the session logic and
//! the platform: `window.localStorage` in the browser, a TOML file on desktop,
//! a plain map in tests.
//!
//! Access is synchronous. Every backend in this crate completes a call before
//! returning, so the single-threaded UI never observes a half-applied write.

use crate::error::StorageError;

/// Synchronous string key/value storage that survives an app restart.
pub trait DurableStorage {
    /// Read a single entry. A missing key is `Ok(None)`, not an error.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write every entry, or none of them.
    fn write(&self, entries: &[(&str, &str)]) -> Result<(), StorageError>;

    /// Remove the given keys. Keys that are already absent are ignored.
    fn remove(&self, keys: &[&str]) -> Result<(), StorageError>;
}
