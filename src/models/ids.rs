//! Entry identifiers
//!
//! Entries are keyed by an integer that starts out as the creation time in
//! milliseconds, which keeps the persisted format a plain JSON number. The
//! generator guarantees ids never repeat, even for two adds inside the same
//! millisecond.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chrono::Utc;

/// Identifier of a single expense entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    /// Wrap a raw id
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntryId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for EntryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Issues strictly increasing entry ids
#[derive(Debug, Clone, Default)]
pub struct EntryIdGenerator {
    last: i64,
}

impl EntryIdGenerator {
    /// Create a generator that will only issue ids above `floor`
    pub fn starting_after(floor: Option<EntryId>) -> Self {
        Self {
            last: floor.map(|id| id.value()).unwrap_or(i64::MIN),
        }
    }

    /// Issue the next id using the current wall clock
    pub fn next_id(&mut self) -> EntryId {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Issue the next id for a given millisecond timestamp
    pub fn next_at(&mut self, millis: i64) -> EntryId {
        let candidate = if millis > self.last {
            millis
        } else {
            self.last.saturating_add(1)
        };
        self.last = candidate;
        EntryId(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_parse() {
        let id = EntryId::new(1_700_000_000_123);
        assert_eq!(id.to_string(), "1700000000123");
        assert_eq!("1700000000123".parse::<EntryId>().unwrap(), id);
        assert!("abc".parse::<EntryId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_number() {
        let id = EntryId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let back: EntryId = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_same_millisecond_does_not_collide() {
        let mut generator = EntryIdGenerator::default();
        let a = generator.next_at(1000);
        let b = generator.next_at(1000);
        let c = generator.next_at(999);
        assert_eq!(a.value(), 1000);
        assert_eq!(b.value(), 1001);
        assert_eq!(c.value(), 1002);
    }

    #[test]
    fn test_starts_above_existing_ids() {
        let mut generator = EntryIdGenerator::starting_after(Some(EntryId::new(5000)));
        assert_eq!(generator.next_at(1000).value(), 5001);
        assert_eq!(generator.next_at(9000).value(), 9000);
    }

    #[test]
    fn test_wall_clock_ids_increase() {
        let mut generator = EntryIdGenerator::default();
        let first = generator.next_id();
        let second = generator.next_id();
        assert!(second > first);
    }
}
