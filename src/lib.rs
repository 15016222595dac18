//! Budget Tracker - set a budget, record expenses, watch what's left
//!
//! This library provides the core functionality for the budget tracker: a
//! budget amount, a list of expense entries recorded against it, and the
//! remaining balance, persisted locally and shown in a terminal UI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Budget state, entries, ids and amounts
//! - `storage`: Key-value persistence of the budget snapshot and layout preference
//! - `display`: Entry rows and balance labels
//! - `services`: The tracker that keeps state, storage and display in step
//! - `audit`: Activity log of every change
//! - `export`: JSON backups and CSV export
//! - `logging`: Diagnostic log setup
//! - `cli`: One-shot command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::{paths::TrackerPaths, settings::Settings};
//! use budget_tracker::services::{Tracker, TrackerOptions};
//! use budget_tracker::storage::Store;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut tracker = Tracker::load(Store::open(&paths)?, TrackerOptions::from_settings(&settings, &paths));
//! tracker.save_budget("500")?;
//! tracker.add_entry("Coffee", "4.50")?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::BudgetError;
