//! Core data models for the budget tracker
//!
//! The budget state, its expense entries, entry identifiers and the money
//! helpers used to parse and display amounts.

pub mod entry;
pub mod ids;
pub mod money;
pub mod state;

pub use entry::{Entry, EntryStamp, DEFAULT_DESCRIPTION};
pub use ids::{EntryId, EntryIdGenerator};
pub use money::{parse_amount, Money};
pub use state::BudgetState;
