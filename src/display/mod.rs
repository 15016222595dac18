//! Display formatting
//!
//! Turns budget state into the rows and labels the TUI draws and the CLI
//! prints.

pub mod balance;
pub mod entry;

pub use balance::{format_balance, BalanceView};
pub use entry::{format_entry_table, render_entry, render_entry_with, EntryList, EntryRow};
