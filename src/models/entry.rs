//! Expense entry model
//!
//! An entry is created once by an add and never changes afterwards; the only
//! way it leaves the list is a delete by id.

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ids::{EntryId, EntryIdGenerator};

/// Description used when the user leaves the field blank
pub const DEFAULT_DESCRIPTION: &str = "Expense";

/// Date pattern used when a configured pattern is not valid strftime
const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// One recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,

    /// What the money was spent on
    #[serde(rename = "desc")]
    pub description: String,

    /// Amount spent (always positive)
    pub amount: f64,

    /// Localized calendar date captured at creation time
    pub date: String,
}

impl Entry {
    /// Normalize user-entered description text
    pub fn normalize_description(raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            trimmed.to_string()
        }
    }
}

/// Identity and creation date handed to a new entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStamp {
    pub id: EntryId,
    pub date: String,
}

impl EntryStamp {
    /// Create a stamp from explicit parts
    pub fn new(id: EntryId, date: impl Into<String>) -> Self {
        Self {
            id,
            date: date.into(),
        }
    }

    /// Stamp an entry created right now
    pub fn now(generator: &mut EntryIdGenerator, date_format: &str) -> Self {
        Self {
            id: generator.next_id(),
            date: format_entry_date(Local::now().date_naive(), date_format),
        }
    }
}

/// Format a calendar date with a strftime pattern
///
/// Invalid patterns fall back to ISO `YYYY-MM-DD` instead of failing.
pub fn format_entry_date(date: NaiveDate, pattern: &str) -> String {
    let valid = !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));
    let pattern = if valid { pattern } else { FALLBACK_DATE_FORMAT };
    date.format(pattern).to_string()
}
