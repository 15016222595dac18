//! Activity history CLI command

use crate::audit::ActivityLogger;
use crate::error::BudgetResult;

/// Print the most recent activity, oldest first
pub fn handle_history(logger: &ActivityLogger, limit: usize) -> BudgetResult<()> {
    if !logger.exists() {
        println!("No activity recorded yet.");
        return Ok(());
    }

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No activity recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
