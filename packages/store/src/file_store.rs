//! # File-backed storage
//!
//! [`FileStorage`] keeps every entry in a single TOML document. It is used on
//! desktop, where there is no browser storage, so a signed-in user stays signed
//! in across restarts.
//!
//! ## Layout
//!
//! ```toml
//! [entries]
//! access_token = "eyJhbGciOi..."
//! user_role = "employee"
//! ```
//!
//! ## Atomicity
//!
//! The whole document is rewritten on every change: it is serialised to a
//! `*.tmp` sibling and then renamed over the original. A crash therefore leaves
//! either the old document or the new one, never a token without its role.
//!
//! A missing file reads as an empty document.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::storage::DurableStorage;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Storage persisted to a TOML file on the local filesystem.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Document, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Document::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, document: &Document) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp, toml::to_string_pretty(document)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl DurableStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.entries.remove(key))
    }

    fn write(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let mut document = self.load()?;
        for (key, value) in entries {
            document.entries.insert(key.to_string(), value.to_string());
        }
        self.save(&document)
    }

    fn remove(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut document = self.load()?;
        let before = document.entries.len();
        for key in keys {
            document.entries.remove(*key);
        }
        if document.entries.len() != before {
            self.save(&document)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.toml");

        let storage = FileStorage::new(&path);
        assert_eq!(storage.read("access_token").unwrap(), None);

        storage
            .write(&[("access_token", "abc"), ("user_role", "admin")])
            .unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());

        // Re-open from the same path
        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.read("access_token").unwrap().as_deref(), Some("abc"));
        assert_eq!(reopened.read("user_role").unwrap().as_deref(), Some("admin"));

        reopened.remove(&["access_token", "user_role"]).unwrap();
        assert_eq!(storage.read("access_token").unwrap(), None);
        assert_eq!(storage.read("user_role").unwrap(), None);
    }

    #[test]
    fn test_corrupt_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "entries = [not toml").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.read("access_token"),
            Err(StorageError::Parse(_))
        ));
    }

    #[test]
    fn test_remove_missing_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        let storage = FileStorage::new(&path);

        storage.remove(&["access_token"]).unwrap();
        assert!(!path.exists());
    }
}
