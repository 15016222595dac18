//! Budget CLI commands
//!
//! Show the balance, set the budget, reset everything, and switch layout.

use clap::ValueEnum;

use crate::display::format_balance;
use crate::error::BudgetResult;
use crate::services::{Layout, Tracker};
use crate::storage::KeyValueStore;

use super::report_storage_warning;

/// Layout choices for `budget layout`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutChoice {
    /// Centered single column
    Normal,
    /// Full-width two-pane view
    Wide,
    /// Switch to the other layout
    Toggle,
}

/// Show budget, spent and remaining
pub fn handle_status<S: KeyValueStore>(tracker: &Tracker<S>) -> BudgetResult<()> {
    print!("{}", format_balance(tracker.balance()));
    println!("Entries:   {:>12}", tracker.state().len());
    Ok(())
}

/// Set the budget from text
pub fn handle_set_budget<S: KeyValueStore>(tracker: &mut Tracker<S>, amount: &str) -> BudgetResult<()> {
    tracker.save_budget(amount)?;
    report_storage_warning(tracker);

    println!("Budget set to {}", tracker.balance().budget);
    println!("Remaining: {}", tracker.balance().remaining);
    Ok(())
}

/// Clear the budget and all entries; without `force` only explains
pub fn handle_reset<S: KeyValueStore>(tracker: &mut Tracker<S>, force: bool) -> BudgetResult<()> {
    if !force {
        println!(
            "This will clear the budget ({}) and {} entries.",
            tracker.balance().budget,
            tracker.state().len()
        );
        println!("Use --force to confirm reset.");
        return Ok(());
    }

    tracker.reset();
    report_storage_warning(tracker);
    println!("Budget and entries cleared.");
    Ok(())
}

/// Show or change the TUI layout preference
pub fn handle_layout<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    choice: Option<LayoutChoice>,
) -> BudgetResult<()> {
    let layout = match choice {
        None => tracker.layout(),
        Some(LayoutChoice::Normal) => tracker.set_layout(Layout::Normal),
        Some(LayoutChoice::Wide) => tracker.set_layout(Layout::Wide),
        Some(LayoutChoice::Toggle) => tracker.toggle_layout(),
    };
    report_storage_warning(tracker);

    println!("Layout: {}", layout);
    Ok(())
}
