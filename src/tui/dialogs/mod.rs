//! Dialogs drawn over the main views

pub mod alert;
pub mod confirm;
pub mod help;
