//! CSV export of expense entries
//!
//! Spreadsheet-friendly: one row per entry, newest first, amounts as plain
//! decimals.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetState;

/// File name for a CSV export taken on `date`
pub fn csv_filename(date: NaiveDate) -> String {
    format!("budget-entries-{}.csv", date.format("%Y-%m-%d"))
}

/// Write all entries as CSV (`id,date,description,amount`)
pub fn export_csv<W: Write>(state: &BudgetState, writer: &mut W) -> BudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["id", "date", "description", "amount"])
        .map_err(|e| BudgetError::Export(format!("Failed to write CSV header: {}", e)))?;

    for entry in &state.entries {
        csv_writer
            .write_record([
                entry.id.to_string(),
                entry.date.clone(),
                entry.description.clone(),
                entry.amount.to_string(),
            ])
            .map_err(|e| BudgetError::Export(format!("Failed to write CSV record: {}", e)))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(format!("Failed to flush CSV: {}", e)))?;

    Ok(())
}
