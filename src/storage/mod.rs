//! Storage layer for the budget tracker
//!
//! Persists the budget snapshot and the layout preference under fixed keys of
//! a key-value backend. On disk the backend is a directory of small files
//! written atomically.

pub mod file_io;
pub mod kv;
pub mod snapshot;

pub use file_io::{read_text, write_json_atomic, write_text_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use snapshot::{decode_snapshot, encode_snapshot, SNAPSHOT_VERSION};

use crate::config::paths::TrackerPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetState;

/// Key holding the serialized budget state
pub const SNAPSHOT_KEY: &str = "samsBudget_v1";

/// Key holding the wide-layout preference
pub const WIDE_MODE_KEY: &str = "samsBudget_wideMode";

/// Typed access to the persisted budget data
pub struct Store<S: KeyValueStore> {
    backend: S,
}

impl Store<FileStore> {
    /// Open the on-disk store for the given paths
    pub fn open(paths: &TrackerPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::new(FileStore::new(paths.data_dir())))
    }
}

impl<S: KeyValueStore> Store<S> {
    /// Wrap a backend
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Access the backend
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Mutable access to the backend
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Load the persisted state
    ///
    /// Returns `Ok(None)` when nothing has been saved yet and
    /// `Err(CorruptSnapshot)` when the stored document can't be used.
    pub fn load(&self) -> BudgetResult<Option<BudgetState>> {
        match self.backend.get(SNAPSHOT_KEY)? {
            Some(text) => decode_snapshot(&text).map(Some),
            None => Ok(None),
        }
    }

    /// Raw text of the persisted snapshot, if any
    pub fn load_raw(&self) -> BudgetResult<Option<String>> {
        self.backend.get(SNAPSHOT_KEY)
    }

    /// Persist the full state
    pub fn save(&mut self, state: &BudgetState) -> BudgetResult<()> {
        let text = encode_snapshot(state)?;
        self.backend.set(SNAPSHOT_KEY, &text)
    }

    /// Move an unreadable snapshot aside so a later save can't destroy it
    pub fn quarantine(&mut self, raw: &str) -> BudgetResult<String> {
        let key = format!("{}.corrupt", SNAPSHOT_KEY);
        self.backend.set(&key, raw)?;
        self.backend.remove(SNAPSHOT_KEY)?;
        Ok(key)
    }

    /// Whether the wide layout was selected last time
    pub fn load_view_preference(&self) -> bool {
        match self.backend.get(WIDE_MODE_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                tracing::warn!("failed to read layout preference: {}", e);
                false
            }
        }
    }

    /// Persist the wide-layout preference
    pub fn save_view_preference(&mut self, wide: bool) -> BudgetResult<()> {
        self.backend
            .set(WIDE_MODE_KEY, if wide { "true" } else { "false" })
            .map_err(|e| BudgetError::Storage(format!("Failed to save layout preference: {}", e)))
    }
}
