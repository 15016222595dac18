//! Export module for the budget tracker
//!
//! - JSON: full backup of the budget and entries (and import of the same)
//! - CSV: entries only, for spreadsheets
//!
//! Exports never overwrite an earlier file: a second export on the same day
//! gets a ` (1)`, ` (2)`, ... suffix.

pub mod csv;
pub mod json;

use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{BudgetError, BudgetResult};

pub use self::csv::{csv_filename, export_csv};
pub use json::{export_filename, export_json, export_to_dir, import_json};

/// Create a new file named `file_name` in `dir`, numbering it if taken
pub fn create_export_file(dir: &Path, file_name: &str) -> BudgetResult<(PathBuf, File)> {
    std::fs::create_dir_all(dir).map_err(|e| {
        BudgetError::Export(format!("Failed to create {}: {}", dir.display(), e))
    })?;

    let (stem, extension) = match file_name.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (file_name, None),
    };

    for n in 0..1000u32 {
        let name = match (n, extension) {
            (0, _) => file_name.to_string(),
            (n, Some(ext)) => format!("{} ({}).{}", stem, n, ext),
            (n, None) => format!("{} ({})", stem, n),
        };
        let path = dir.join(name);

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(BudgetError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                )))
            }
        }
    }

    Err(BudgetError::Export(format!(
        "No free file name for {} in {}",
        file_name,
        dir.display()
    )))
}
