//! Activity record data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Entry, EntryId};

/// Kinds of mutation recorded in the activity log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    SetBudget,
    AddEntry,
    DeleteEntry,
    Reset,
    Import,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::SetBudget => write!(f, "SET BUDGET"),
            Operation::AddEntry => write!(f, "ADD"),
            Operation::DeleteEntry => write!(f, "DELETE"),
            Operation::Reset => write!(f, "RESET"),
            Operation::Import => write!(f, "IMPORT"),
        }
    }
}

/// A single activity log line
///
/// `before` / `after` hold JSON of whatever changed: the budget value, the
/// entry, or a summary of the whole state for reset and import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Entry affected, for add and delete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<EntryId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl ActivityEntry {
    fn new(operation: Operation) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entry_id: None,
            before: None,
            after: None,
        }
    }

    /// Budget changed from `before` to `after`
    pub fn set_budget(before: f64, after: f64) -> Self {
        Self {
            before: Some(serde_json::json!(before)),
            after: Some(serde_json::json!(after)),
            ..Self::new(Operation::SetBudget)
        }
    }

    /// A new entry was recorded
    pub fn add_entry(entry: &Entry) -> Self {
        Self {
            entry_id: Some(entry.id),
            after: serde_json::to_value(entry).ok(),
            ..Self::new(Operation::AddEntry)
        }
    }

    /// An entry was removed
    pub fn delete_entry(entry: &Entry) -> Self {
        Self {
            entry_id: Some(entry.id),
            before: serde_json::to_value(entry).ok(),
            ..Self::new(Operation::DeleteEntry)
        }
    }

    /// Everything was cleared
    pub fn reset(budget: f64, entry_count: usize) -> Self {
        Self {
            before: Some(serde_json::json!({ "budget": budget, "entries": entry_count })),
            ..Self::new(Operation::Reset)
        }
    }

    /// State was replaced from a backup file
    pub fn import(source: &str, budget: f64, entry_count: usize) -> Self {
        Self {
            after: Some(serde_json::json!({
                "source": source,
                "budget": budget,
                "entries": entry_count,
            })),
            ..Self::new(Operation::Import)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(id) = self.entry_id {
            output.push_str(&format!(" #{}", id));
        }

        match (&self.before, &self.after) {
            (Some(before), Some(after)) => output.push_str(&format!(" {} -> {}", before, after)),
            (Some(before), None) => output.push_str(&format!(" {}", before)),
            (None, Some(after)) => output.push_str(&format!(" {}", after)),
            (None, None) => {}
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee() -> Entry {
        Entry {
            id: EntryId::new(5),
            description: "Coffee".into(),
            amount: 4.5,
            date: "1/1/2025".into(),
        }
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::AddEntry.to_string(), "ADD");
        assert_eq!(Operation::SetBudget.to_string(), "SET BUDGET");
    }

    #[test]
    fn test_add_entry_record() {
        let record = ActivityEntry::add_entry(&coffee());
        assert_eq!(record.operation, Operation::AddEntry);
        assert_eq!(record.entry_id, Some(EntryId::new(5)));
        assert!(record.before.is_none());
        assert_eq!(record.after.as_ref().unwrap()["desc"], "Coffee");
    }

    #[test]
    fn test_delete_entry_record() {
        let record = ActivityEntry::delete_entry(&coffee());
        assert!(record.after.is_none());
        assert_eq!(record.before.as_ref().unwrap()["amount"], 4.5);
    }

    #[test]
    fn test_human_readable() {
        let text = ActivityEntry::set_budget(0.0, 500.0).format_human_readable();
        assert!(text.contains("SET BUDGET"));
        assert!(text.contains("0.0 -> 500.0"));
    }

    #[test]
    fn test_serialized_operation_name() {
        let json = serde_json::to_string(&ActivityEntry::reset(10.0, 2)).unwrap();
        assert!(json.contains("\"operation\":\"reset\""));
        assert!(!json.contains("entry_id"));
    }
}
