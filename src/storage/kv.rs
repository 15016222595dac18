//! Key-value backends
//!
//! The tracker persists a handful of string values under fixed keys. On disk
//! every key is one file inside the data directory; tests use the in-memory
//! backend.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{BudgetError, BudgetResult};

use super::file_io::{read_text, write_text_atomic};

/// A string store scoped by key
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> BudgetResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()>;

    /// Remove `key` if present
    fn remove(&mut self, key: &str) -> BudgetResult<()>;
}

/// Reject keys that could escape the data directory
fn check_key(key: &str) -> BudgetResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(BudgetError::Storage(format!("Invalid storage key: {:?}", key)))
    }
}

/// File-per-key store rooted at a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir` (created lazily on first write)
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn key_path(&self, key: &str) -> BudgetResult<PathBuf> {
        check_key(key)?;
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        read_text(self.key_path(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        write_text_atomic(self.key_path(key)?, value)
    }

    fn remove(&mut self, key: &str) -> BudgetResult<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(BudgetError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// In-memory store, mainly for tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    /// When set, every write fails (simulates a full or read-only medium)
    pub fail_writes: bool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Raw view of a stored value
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        check_key(key)?;
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        check_key(key)?;
        if self.fail_writes {
            return Err(BudgetError::Storage(format!(
                "Storage quota exceeded writing {}",
                key
            )));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> BudgetResult<()> {
        check_key(key)?;
        self.values.remove(key);
        Ok(())
    }
}
