//! Tracker service
//!
//! Owns the budget state and keeps three things in step after every user
//! action: the in-memory state, the persisted snapshot and the visible entry
//! list. Adds and deletes patch the list one row at a time; only load, reset
//! and import render it from scratch.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::audit::{ActivityEntry, ActivityLogger};
use crate::config::paths::TrackerPaths;
use crate::config::settings::Settings;
use crate::display::{BalanceView, EntryList};
use crate::error::{BudgetError, BudgetResult};
use crate::export;
use crate::models::{parse_amount, BudgetState, Entry, EntryId, EntryIdGenerator, EntryStamp};
use crate::storage::{KeyValueStore, Store};

/// Layout preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Normal,
    Wide,
}

impl Layout {
    /// Layout for a stored preference flag
    pub fn from_wide(wide: bool) -> Self {
        if wide {
            Self::Wide
        } else {
            Self::Normal
        }
    }

    pub fn is_wide(&self) -> bool {
        matches!(self, Self::Wide)
    }

    /// The other layout
    pub fn toggled(&self) -> Self {
        match self {
            Self::Normal => Self::Wide,
            Self::Wide => Self::Normal,
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Wide => write!(f, "wide"),
        }
    }
}

/// Presentation options taken from settings
#[derive(Debug, Clone)]
pub struct TrackerOptions {
    pub currency_symbol: String,
    pub date_format: String,
    pub activity_log: Option<PathBuf>,
}

impl TrackerOptions {
    /// Options for a configured installation
    pub fn from_settings(settings: &Settings, paths: &TrackerPaths) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
            activity_log: Some(paths.activity_log()),
        }
    }
}

impl Default for TrackerOptions {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            currency_symbol: settings.currency_symbol,
            date_format: settings.date_format,
            activity_log: None,
        }
    }
}

/// The budget tracker: sole owner and writer of the budget state
pub struct Tracker<S: KeyValueStore> {
    state: BudgetState,
    store: Store<S>,
    ids: EntryIdGenerator,
    list: EntryList,
    balance: BalanceView,
    layout: Layout,
    options: TrackerOptions,
    activity: Option<ActivityLogger>,
    storage_warning: Option<String>,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Load persisted state and preferences, then render everything once
    ///
    /// A missing snapshot starts empty. An unreadable one is moved aside and
    /// the session starts empty too; loading never fails.
    pub fn load(store: Store<S>, options: TrackerOptions) -> Self {
        let mut store = store;
        let mut storage_warning = None;

        let state = match store.load() {
            Ok(Some(state)) => {
                tracing::info!(entries = state.len(), "loaded budget snapshot");
                state
            }
            Ok(None) => {
                tracing::info!("no saved budget, starting empty");
                BudgetState::reset()
            }
            Err(e) => {
                tracing::warn!("could not load saved budget, starting empty: {}", e);
                storage_warning = Some(match quarantine_raw(&mut store) {
                    Some(key) => format!("Saved data was unreadable and was moved to {}", key),
                    None => "Saved data was unreadable; starting with an empty budget".to_string(),
                });
                BudgetState::reset()
            }
        };

        let layout = Layout::from_wide(store.load_view_preference());
        let activity = options.activity_log.clone().map(ActivityLogger::new);

        let mut tracker = Self {
            ids: EntryIdGenerator::starting_after(state.max_entry_id()),
            list: EntryList::new(options.currency_symbol.clone()),
            balance: BalanceView::from_state(&state, &options.currency_symbol),
            state,
            store,
            layout,
            options,
            activity,
            storage_warning,
        };
        tracker.render_all();
        tracker
    }

    /// Current state
    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Visible entry rows
    pub fn list(&self) -> &EntryList {
        &self.list
    }

    /// Balance labels
    pub fn balance(&self) -> &BalanceView {
        &self.balance
    }

    /// Current layout
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The underlying store
    pub fn store(&self) -> &Store<S> {
        &self.store
    }

    /// Mutable access to the underlying store
    pub fn store_mut(&mut self) -> &mut Store<S> {
        &mut self.store
    }

    /// Currency symbol used for display
    pub fn currency_symbol(&self) -> &str {
        &self.options.currency_symbol
    }

    /// Take the last non-fatal storage problem, if any
    pub fn take_storage_warning(&mut self) -> Option<String> {
        self.storage_warning.take()
    }

    /// Set the budget from user text
    ///
    /// Invalid text leaves everything unchanged and returns `InvalidBudget`.
    pub fn save_budget(&mut self, input: &str) -> BudgetResult<()> {
        let value = parse_amount(input)
            .ok_or_else(|| BudgetError::InvalidBudget(input.trim().to_string()))?;
        self.set_budget(value)
    }

    /// Set the budget to a numeric value
    pub fn set_budget(&mut self, value: f64) -> BudgetResult<()> {
        let next = self.state.set_budget(value)?;
        let before = self.state.budget;
        self.state = next;

        self.persist();
        self.record(ActivityEntry::set_budget(before, value));
        self.refresh_balance();
        Ok(())
    }

    /// Record an expense from user text
    pub fn add_entry(&mut self, description: &str, amount_input: &str) -> BudgetResult<Entry> {
        let amount = parse_amount(amount_input)
            .ok_or_else(|| BudgetError::InvalidAmount(amount_input.trim().to_string()))?;
        self.add_entry_amount(description, amount)
    }

    /// Record an expense with a numeric amount
    pub fn add_entry_amount(&mut self, description: &str, amount: f64) -> BudgetResult<Entry> {
        let stamp = EntryStamp::now(&mut self.ids, &self.options.date_format);
        let (next, entry) = self.state.add_entry(description, amount, stamp)?;
        self.state = next;

        self.persist();
        self.record(ActivityEntry::add_entry(&entry));
        self.list.prepend(&entry);
        self.refresh_balance();

        tracing::debug!(id = %entry.id, amount = entry.amount, "entry added");
        Ok(entry)
    }

    /// Delete an entry by id; unknown ids change nothing and return `None`
    pub fn delete_entry(&mut self, id: EntryId) -> Option<Entry> {
        let removed = self.state.find_entry(id).cloned()?;
        self.state = self.state.delete_entry(id);

        self.persist();
        self.record(ActivityEntry::delete_entry(&removed));
        self.list.remove(id);
        self.refresh_balance();

        tracing::debug!(id = %id, "entry deleted");
        Some(removed)
    }

    /// Delete whatever entry the visible row at `index` belongs to
    pub fn delete_row(&mut self, index: usize) -> Option<Entry> {
        let id = self.list.id_at(index)?;
        self.delete_entry(id)
    }

    /// Clear the budget and every entry
    pub fn reset(&mut self) {
        let activity = ActivityEntry::reset(self.state.budget, self.state.len());
        self.state = BudgetState::reset();

        self.persist();
        self.record(activity);
        self.render_all();
        tracing::info!("budget reset");
    }

    /// Replace the whole state with an imported one
    pub fn replace_state(&mut self, state: BudgetState, source: &str) -> BudgetResult<()> {
        state.validate()?;
        let activity = ActivityEntry::import(source, state.budget, state.len());

        self.ids = EntryIdGenerator::starting_after(state.max_entry_id());
        self.state = state;

        self.persist();
        self.record(activity);
        self.render_all();
        tracing::info!(source, entries = self.state.len(), "budget imported");
        Ok(())
    }

    /// Flip between normal and wide layout and remember the choice
    pub fn toggle_layout(&mut self) -> Layout {
        self.set_layout(self.layout.toggled())
    }

    /// Switch to a specific layout and remember the choice
    pub fn set_layout(&mut self, layout: Layout) -> Layout {
        self.layout = layout;
        if let Err(e) = self.store.save_view_preference(layout.is_wide()) {
            tracing::warn!("failed to save layout preference: {}", e);
            self.storage_warning = Some(e.to_string());
        }
        self.layout
    }

    /// Write a JSON backup for `date` into `dir`
    pub fn export_to_dir(&self, dir: &Path, date: NaiveDate) -> BudgetResult<PathBuf> {
        let path = export::export_to_dir(&self.state, dir, date)?;
        tracing::info!(path = %path.display(), "backup exported");
        Ok(path)
    }

    /// Write the entries as CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> BudgetResult<()> {
        export::export_csv(&self.state, writer)
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.state) {
            tracing::warn!("failed to save budget, keeping changes in memory: {}", e);
            self.storage_warning = Some(format!("Changes not saved: {}", e));
        }
    }

    fn record(&self, entry: ActivityEntry) {
        if let Some(logger) = &self.activity {
            if let Err(e) = logger.log(&entry) {
                tracing::warn!("failed to write activity log: {}", e);
            }
        }
    }

    fn refresh_balance(&mut self) {
        self.balance = BalanceView::from_state(&self.state, &self.options.currency_symbol);
    }

    fn render_all(&mut self) {
        self.list.rebuild(&self.state);
        self.refresh_balance();
    }
}

fn quarantine_raw<S: KeyValueStore>(store: &mut Store<S>) -> Option<String> {
    let raw = store.load_raw().ok().flatten()?;
    match store.quarantine(&raw) {
        Ok(key) => Some(key),
        Err(e) => {
            tracing::warn!("failed to set aside unreadable snapshot: {}", e);
            None
        }
    }
}
