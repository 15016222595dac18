//! Snapshot document format
//!
//! ```json
//! { "version": 1, "budget": 500, "entries": [{ "id": 1, "desc": "Coffee", "amount": 4.5, "date": "1/2/2025" }] }
//! ```
//!
//! Documents written before versioning carry no `version` field; they share
//! the version 1 layout and are read as-is.

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetState, Entry};

/// Version written by this build
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    budget: f64,
    entries: &'a [Entry],
}

#[derive(Deserialize)]
struct SnapshotDocument {
    #[serde(default)]
    version: Option<u32>,
    budget: f64,
    #[serde(default)]
    entries: Vec<Entry>,
}

/// Serialize a state into the compact persisted form
pub fn encode_snapshot(state: &BudgetState) -> BudgetResult<String> {
    let doc = SnapshotRef {
        version: SNAPSHOT_VERSION,
        budget: state.budget,
        entries: &state.entries,
    };
    serde_json::to_string(&doc)
        .map_err(|e| BudgetError::Storage(format!("Failed to serialize snapshot: {}", e)))
}

/// Parse a persisted document, migrating older layouts
pub fn decode_snapshot(text: &str) -> BudgetResult<BudgetState> {
    let doc: SnapshotDocument = serde_json::from_str(text)
        .map_err(|e| BudgetError::CorruptSnapshot(format!("Unreadable document: {}", e)))?;

    let version = doc.version.unwrap_or(0);
    if version > SNAPSHOT_VERSION {
        return Err(BudgetError::CorruptSnapshot(format!(
            "Snapshot version {} is newer than supported version {}",
            version, SNAPSHOT_VERSION
        )));
    }

    let state = migrate(version, doc);
    state
        .validate()
        .map_err(|e| BudgetError::CorruptSnapshot(e.to_string()))?;

    Ok(state)
}

fn migrate(version: u32, doc: SnapshotDocument) -> BudgetState {
    if version == 0 {
        // Unversioned documents already use the version 1 field layout
        tracing::debug!("upgrading unversioned snapshot to version {}", SNAPSHOT_VERSION);
    }

    BudgetState {
        budget: doc.budget,
        entries: doc.entries,
    }
}
