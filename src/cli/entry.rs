//! Entry CLI commands
//!
//! Add, list and delete expense entries.

use crate::display::{format_balance, format_entry_table};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{EntryId, Money};
use crate::services::Tracker;
use crate::storage::KeyValueStore;

use super::report_storage_warning;

/// Record an expense
pub fn handle_add<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    amount: &str,
    description: Option<&str>,
) -> BudgetResult<()> {
    let entry = tracker.add_entry(description.unwrap_or(""), amount)?;
    report_storage_warning(tracker);

    println!(
        "Added {} {} on {} (id {})",
        entry.description,
        Money::new(entry.amount).format_outflow(tracker.currency_symbol()),
        entry.date,
        entry.id
    );
    println!("Remaining: {}", tracker.balance().remaining);
    Ok(())
}

/// List entries, newest first
pub fn handle_list<S: KeyValueStore>(tracker: &Tracker<S>, limit: Option<usize>) -> BudgetResult<()> {
    let rows = tracker.list().rows();
    let shown = match limit {
        Some(limit) => &rows[..limit.min(rows.len())],
        None => rows,
    };

    print!("{}", format_entry_table(shown));
    if shown.len() < rows.len() {
        println!("Showing {} of {} entries", shown.len(), rows.len());
    }
    println!();
    print!("{}", format_balance(tracker.balance()));
    Ok(())
}

/// Delete an entry; without `force` only shows what would be deleted
pub fn handle_delete<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    id: EntryId,
    force: bool,
) -> BudgetResult<()> {
    let entry = tracker
        .state()
        .find_entry(id)
        .cloned()
        .ok_or_else(|| BudgetError::entry_not_found(id.to_string()))?;
    let amount = Money::new(entry.amount).format_outflow(tracker.currency_symbol());

    if !force {
        println!("Entry {}: {} {} on {}", entry.id, entry.description, amount, entry.date);
        println!("Use --force to confirm deletion.");
        return Ok(());
    }

    tracker.delete_entry(id);
    report_storage_warning(tracker);

    println!("Deleted {} {}", entry.description, amount);
    println!("Remaining: {}", tracker.balance().remaining);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::TrackerOptions;
    use crate::storage::{MemoryStore, Store};

    fn tracker() -> Tracker<MemoryStore> {
        Tracker::load(Store::new(MemoryStore::new()), TrackerOptions::default())
    }

    #[test]
    fn test_add_without_description() {
        let mut t = tracker();
        handle_add(&mut t, "7.25", None).unwrap();
        assert_eq!(t.state().entries[0].description, "Expense");
        assert_eq!(t.state().entries[0].amount, 7.25);
    }

    #[test]
    fn test_add_rejects_bad_amount() {
        let mut t = tracker();
        let err = handle_add(&mut t, "0", Some("Nothing")).unwrap_err();
        assert!(matches!(err, BudgetError::InvalidAmount(_)));
        assert!(t.state().is_empty());
    }

    #[test]
    fn test_delete_needs_force() {
        let mut t = tracker();
        let entry = t.add_entry("Book", "15").unwrap();

        handle_delete(&mut t, entry.id, false).unwrap();
        assert_eq!(t.state().len(), 1);

        handle_delete(&mut t, entry.id, true).unwrap();
        assert!(t.state().is_empty());
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut t = tracker();
        let err = handle_delete(&mut t, EntryId::new(42), true).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_with_limit() {
        let mut t = tracker();
        t.add_entry("A", "1").unwrap();
        t.add_entry("B", "2").unwrap();
        handle_list(&t, Some(1)).unwrap();
        handle_list(&t, Some(10)).unwrap();
    }
}
