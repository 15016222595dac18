//! Diagnostic logging
//!
//! Installs a `tracing` subscriber that writes to `budget.log` in the base
//! directory. Nothing is written to the terminal so the TUI stays intact.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{Settings, TrackerPaths};
use crate::error::{BudgetError, BudgetResult};

/// Environment variable that overrides `Settings::log_level`
pub const LOG_ENV: &str = "BUDGET_TRACKER_LOG";

/// Build the filter from the environment override or the settings
pub fn filter_for(settings: &Settings) -> EnvFilter {
    let directive = std::env::var(LOG_ENV).unwrap_or_else(|_| settings.log_level.clone());
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
///
/// Calling this more than once keeps the first subscriber.
pub fn init(paths: &TrackerPaths, settings: &Settings) -> BudgetResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| BudgetError::Io(format!("Failed to open log file: {}", e)))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter_for(settings))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        init(&paths, &Settings::default()).unwrap();
        assert!(paths.log_file().exists());

        // a second call is harmless
        init(&paths, &Settings::default()).unwrap();
    }

    #[test]
    fn test_bad_level_falls_back() {
        let settings = Settings {
            log_level: "not a [valid directive".into(),
            ..Settings::default()
        };
        // must not panic
        let _ = filter_for(&settings);
    }
}
