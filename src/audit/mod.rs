//! Activity log for the budget tracker
//!
//! Records every budget change, add, delete, reset and import with the
//! before/after values in an append-only JSONL file.
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::audit::{ActivityEntry, ActivityLogger};
//!
//! let logger = ActivityLogger::new(paths.activity_log());
//! logger.log(&ActivityEntry::set_budget(0.0, 500.0))?;
//! ```

mod entry;
mod logger;

pub use entry::{ActivityEntry, Operation};
pub use logger::ActivityLogger;
