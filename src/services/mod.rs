//! Service layer for the budget tracker
//!
//! The tracker sits between the user-facing front ends (CLI and TUI) and the
//! model and storage layers.

pub mod tracker;

pub use tracker::{Layout, Tracker, TrackerOptions};
