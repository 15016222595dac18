//! Terminal User Interface module
//!
//! A ratatui front end for the budget tracker: a budget summary, an entry
//! form, the entry list, and dialogs for confirmations and alerts.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
