//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the tracker service.

pub mod budget;
pub mod entry;
pub mod export;
pub mod history;

pub use budget::{handle_layout, handle_reset, handle_set_budget, handle_status, LayoutChoice};
pub use entry::{handle_add, handle_delete, handle_list};
pub use export::{handle_export, handle_import, ExportFormat};
pub use history::handle_history;

use crate::services::Tracker;
use crate::storage::KeyValueStore;

/// Print a non-fatal storage problem to stderr
pub fn report_storage_warning<S: KeyValueStore>(tracker: &mut Tracker<S>) {
    if let Some(warning) = tracker.take_storage_warning() {
        eprintln!("Warning: {}", warning);
    }
}
