//! JSON backup export and import
//!
//! A backup holds exactly the budget and the entries, pretty-printed with
//! two-space indentation. Importing accepts a backup or a raw snapshot.

use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use super::create_export_file;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetState, Entry};
use crate::storage::decode_snapshot;

#[derive(Serialize)]
struct BackupRef<'a> {
    budget: f64,
    entries: &'a [Entry],
}

/// File name for a backup taken on `date`
pub fn export_filename(date: NaiveDate) -> String {
    format!("budget-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Write a pretty-printed backup of `state`
pub fn export_json<W: Write>(state: &BudgetState, writer: &mut W) -> BudgetResult<()> {
    let backup = BackupRef {
        budget: state.budget,
        entries: &state.entries,
    };

    serde_json::to_writer_pretty(&mut *writer, &backup)
        .map_err(|e| BudgetError::Export(format!("Failed to serialize backup: {}", e)))?;
    writeln!(writer).map_err(|e| BudgetError::Export(format!("Failed to write backup: {}", e)))?;

    Ok(())
}

/// Write a backup into `dir`, named after `date`; returns the file path
///
/// An earlier backup with the same name is kept and the new one is numbered.
pub fn export_to_dir(state: &BudgetState, dir: &Path, date: NaiveDate) -> BudgetResult<PathBuf> {
    let (path, file) = create_export_file(dir, &export_filename(date))?;

    let mut writer = BufWriter::new(file);
    export_json(state, &mut writer)?;
    writer
        .flush()
        .map_err(|e| BudgetError::Export(format!("Failed to flush backup: {}", e)))?;

    Ok(path)
}

/// Read a backup back into a state
pub fn import_json<R: Read>(reader: &mut R) -> BudgetResult<BudgetState> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| BudgetError::Import(format!("Failed to read backup: {}", e)))?;

    decode_snapshot(&text).map_err(|e| match e {
        BudgetError::CorruptSnapshot(msg) => BudgetError::Import(msg),
        other => other,
    })
}
