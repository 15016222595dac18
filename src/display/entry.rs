//! Entry rows and the visible entry list
//!
//! `render_entry` turns one entry into a display row. `EntryList` is the list
//! the user sees: it is rebuilt from a full state only on load, reset and
//! import, while adds and deletes patch exactly one row.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{BudgetState, Entry, EntryId, Money};

/// One rendered line item
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct EntryRow {
    /// Entry the row's delete control acts on
    #[tabled(rename = "ID")]
    pub id: EntryId,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Date")]
    pub date: String,
    /// Amount as an outflow, e.g. `-$4.50`
    #[tabled(rename = "Amount")]
    pub amount: String,
}

/// Render one entry with the default `$` symbol
pub fn render_entry(entry: &Entry) -> EntryRow {
    render_entry_with(entry, "$")
}

/// Render one entry with a specific currency symbol
pub fn render_entry_with(entry: &Entry, symbol: &str) -> EntryRow {
    EntryRow {
        id: entry.id,
        description: entry.description.clone(),
        date: entry.date.clone(),
        amount: Money::new(entry.amount).format_outflow(symbol),
    }
}

/// The rows currently on screen, newest first
#[derive(Debug, Clone)]
pub struct EntryList {
    rows: Vec<EntryRow>,
    symbol: String,
    full_renders: usize,
}

impl EntryList {
    /// Create an empty list rendering amounts with `symbol`
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            symbol: symbol.into(),
            full_renders: 0,
        }
    }

    /// Discard every row and render the whole state again
    pub fn rebuild(&mut self, state: &BudgetState) {
        self.rows = state
            .entries
            .iter()
            .map(|e| render_entry_with(e, &self.symbol))
            .collect();
        self.full_renders += 1;
    }

    /// Render a single new entry and insert it at the top
    pub fn prepend(&mut self, entry: &Entry) {
        self.rows.insert(0, render_entry_with(entry, &self.symbol));
    }

    /// Remove the row for `id`; returns whether a row was removed
    pub fn remove(&mut self, id: EntryId) -> bool {
        match self.rows.iter().position(|row| row.id == id) {
            Some(pos) => {
                self.rows.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Resolve which entry the row at `index` belongs to
    pub fn id_at(&self, index: usize) -> Option<EntryId> {
        self.rows.get(index).map(|row| row.id)
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> &[EntryRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// How many full render passes have happened
    pub fn full_renders(&self) -> usize {
        self.full_renders
    }

    /// Whether the rows match what a full render of `state` would produce
    pub fn matches(&self, state: &BudgetState) -> bool {
        self.rows.len() == state.entries.len()
            && self
                .rows
                .iter()
                .zip(&state.entries)
                .all(|(row, entry)| *row == render_entry_with(entry, &self.symbol))
    }
}

/// Format rows as a table for terminal output
pub fn format_entry_table(rows: &[EntryRow]) -> String {
    if rows.is_empty() {
        return "No entries yet.\n".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryStamp;

    fn entry(id: i64, desc: &str, amount: f64) -> Entry {
        Entry {
            id: EntryId::new(id),
            description: desc.into(),
            amount,
            date: "1/5/2025".into(),
        }
    }

    #[test]
    fn test_render_entry() {
        let row = render_entry(&entry(7, "Coffee", 4.5));
        assert_eq!(row.id, EntryId::new(7));
        assert_eq!(row.description, "Coffee");
        assert_eq!(row.date, "1/5/2025");
        assert_eq!(row.amount, "-$4.50");
    }

    #[test]
    fn test_render_rounds_for_display_only() {
        let e = entry(1, "Odd", 2.005);
        assert_eq!(render_entry(&e).amount.len(), "-$2.00".len());
        assert_eq!(e.amount, 2.005);
    }

    #[test]
    fn test_rebuild_counts_full_renders() {
        let state = BudgetState::reset();
        let (state, _) = state
            .add_entry("A", 1.0, EntryStamp::new(EntryId::new(1), "d"))
            .unwrap();
        let (state, _) = state
            .add_entry("B", 2.0, EntryStamp::new(EntryId::new(2), "d"))
            .unwrap();

        let mut list = EntryList::new("$");
        list.rebuild(&state);
        assert_eq!(list.full_renders(), 1);
        assert_eq!(list.len(), 2);
        assert_eq!(list.id_at(0), Some(EntryId::new(2)));
        assert!(list.matches(&state));
    }

    #[test]
    fn test_prepend_and_remove_are_incremental() {
        let mut list = EntryList::new("$");
        list.rebuild(&BudgetState::reset());

        list.prepend(&entry(1, "First", 1.0));
        list.prepend(&entry(2, "Second", 2.0));
        assert_eq!(list.id_at(0), Some(EntryId::new(2)));
        assert_eq!(list.id_at(1), Some(EntryId::new(1)));

        assert!(list.remove(EntryId::new(1)));
        assert!(!list.remove(EntryId::new(1)));
        assert_eq!(list.len(), 1);
        assert_eq!(list.full_renders(), 1);
    }

    #[test]
    fn test_id_at_out_of_range() {
        let list = EntryList::new("$");
        assert_eq!(list.id_at(0), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_format_table() {
        let rows = vec![render_entry(&entry(3, "Lunch", 12.0))];
        let table = format_entry_table(&rows);
        assert!(table.contains("Lunch"));
        assert!(table.contains("-$12.00"));
        assert!(table.contains("Description"));
        assert_eq!(format_entry_table(&[]), "No entries yet.\n");
    }
}
