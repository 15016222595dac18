//! CLI commands for export and import
//!
//! `export` writes a dated JSON backup (or CSV of the entries) into a
//! directory; `import` replaces the current data with a JSON backup.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::ValueEnum;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{create_export_file, csv_filename, import_json};
use crate::models::Money;
use crate::services::Tracker;
use crate::storage::KeyValueStore;

use super::report_storage_warning;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Full backup of budget and entries
    #[default]
    Json,
    /// Entries only, for spreadsheets
    Csv,
}

/// Write an export into `dir`, returning the file written
pub fn handle_export<S: KeyValueStore>(
    tracker: &Tracker<S>,
    dir: &Path,
    format: ExportFormat,
) -> BudgetResult<PathBuf> {
    let today = Utc::now().date_naive();

    let path = match format {
        ExportFormat::Json => tracker.export_to_dir(dir, today)?,
        ExportFormat::Csv => {
            let (path, file) = create_export_file(dir, &csv_filename(today))?;
            let mut writer = BufWriter::new(file);
            tracker.export_csv(&mut writer)?;
            writer
                .flush()
                .map_err(|e| BudgetError::Export(format!("Failed to flush CSV: {}", e)))?;
            path
        }
    };

    println!("Exported to: {}", path.display());
    Ok(path)
}

/// Replace current data with a JSON backup; without `force` only previews
pub fn handle_import<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    file: &Path,
    force: bool,
) -> BudgetResult<()> {
    let handle = File::open(file).map_err(|e| {
        BudgetError::Import(format!("Failed to open {}: {}", file.display(), e))
    })?;
    let state = import_json(&mut BufReader::new(handle))?;

    let symbol = tracker.currency_symbol().to_string();
    println!("Backup: {}", file.display());
    println!("  Budget:  {}", Money::new(state.budget).format_with_symbol(&symbol));
    println!("  Entries: {}", state.len());

    if !force {
        println!();
        println!("WARNING: This will replace the current budget and all entries!");
        println!("Use --force to confirm import.");
        return Ok(());
    }

    tracker.replace_state(state, &file.display().to_string())?;
    report_storage_warning(tracker);

    println!("Import complete. Remaining: {}", tracker.balance().remaining);
    Ok(())
}
