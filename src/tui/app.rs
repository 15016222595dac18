//! Application state for the TUI
//!
//! The App struct holds everything needed for rendering and handling events.
//! All budget changes go through the tracker; the App only owns input fields,
//! focus, dialogs and notifications.

use std::path::PathBuf;

use chrono::Utc;

use crate::error::BudgetError;
use crate::display::EntryRow;
use crate::services::{Layout, Tracker};
use crate::storage::KeyValueStore;

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Alert shown when an entry amount is rejected
pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid amount.";

/// Status note shown when a budget edit is rejected
pub const BUDGET_UNCHANGED_MESSAGE: &str = "Budget unchanged";

/// Whether the budget is shown or being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetMode {
    #[default]
    Display,
    Editing,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are commands
    #[default]
    Normal,
    /// Keys go to the entry form
    EntryForm,
    /// Keys go to the budget editor
    BudgetEditor,
}

/// Field of the entry form that has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Description,
    Amount,
}

/// A destructive action waiting for confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    /// Remove the entry shown in `row`
    DeleteEntry { row: EntryRow },
    Reset,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// Blocking message that must be dismissed
    Alert(String),
    Confirm(PendingAction),
}

/// Main application state
pub struct App<S: KeyValueStore> {
    /// The budget tracker
    pub tracker: Tracker<S>,

    /// Where exports are written
    pub export_dir: PathBuf,

    /// Whether the app should quit
    pub should_quit: bool,

    pub budget_mode: BudgetMode,
    pub input_mode: InputMode,
    pub active_dialog: ActiveDialog,

    /// Focused field of the entry form
    pub focused_field: FormField,
    pub description_input: TextInput,
    pub amount_input: TextInput,
    pub budget_input: TextInput,

    /// Selected row in the entry list
    pub selected_index: usize,

    /// Non-blocking note shown in the status bar
    pub status_message: Option<String>,

    pub notifications: NotificationQueue,
}

impl<S: KeyValueStore> App<S> {
    /// Create a new App around a loaded tracker
    pub fn new(tracker: Tracker<S>, export_dir: PathBuf) -> Self {
        let mut app = Self {
            tracker,
            export_dir,
            should_quit: false,
            budget_mode: BudgetMode::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            focused_field: FormField::default(),
            description_input: TextInput::new("Description").placeholder("Expense"),
            amount_input: TextInput::new("Amount").placeholder("0.00"),
            budget_input: TextInput::new("Budget"),
            selected_index: 0,
            status_message: None,
            notifications: NotificationQueue::new(),
        };
        app.drain_storage_warning();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Periodic housekeeping
    pub fn on_tick(&mut self) {
        self.notifications.remove_expired();
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Start typing into the entry form, description first
    pub fn start_entry(&mut self) {
        self.input_mode = InputMode::EntryForm;
        self.focus_field(FormField::Description);
    }

    /// Leave the entry form, keeping whatever was typed
    pub fn leave_entry(&mut self) {
        self.input_mode = InputMode::Normal;
        self.description_input.focused = false;
        self.amount_input.focused = false;
    }

    /// Move focus to the other form field
    pub fn next_field(&mut self) {
        let next = match self.focused_field {
            FormField::Description => FormField::Amount,
            FormField::Amount => FormField::Description,
        };
        self.focus_field(next);
    }

    pub fn focus_field(&mut self, field: FormField) {
        self.focused_field = field;
        self.description_input.focused = field == FormField::Description;
        self.amount_input.focused = field == FormField::Amount;
    }

    /// The input that currently receives keystrokes
    pub fn active_input(&mut self) -> Option<&mut TextInput> {
        match self.input_mode {
            InputMode::Normal => None,
            InputMode::BudgetEditor => Some(&mut self.budget_input),
            InputMode::EntryForm => match self.focused_field {
                FormField::Description => Some(&mut self.description_input),
                FormField::Amount => Some(&mut self.amount_input),
            },
        }
    }

    /// Add an entry from the form
    ///
    /// A rejected amount raises an alert and keeps both inputs as typed.
    pub fn submit_entry(&mut self) {
        let description = self.description_input.value().to_string();
        let amount = self.amount_input.value().to_string();

        match self.tracker.add_entry(&description, &amount) {
            Ok(entry) => {
                self.description_input.clear();
                self.amount_input.clear();
                self.input_mode = InputMode::EntryForm;
                self.focus_field(FormField::Description);
                self.selected_index = 0;
                self.notify(Notification::success(format!("Added {}", entry.description)));
            }
            Err(BudgetError::InvalidAmount(_)) => {
                self.open_dialog(ActiveDialog::Alert(INVALID_AMOUNT_MESSAGE.to_string()));
            }
            Err(e) => {
                self.notify(Notification::error(e.to_string()));
            }
        }
        self.drain_storage_warning();
    }

    /// Open the budget editor, pre-filled with the current budget
    pub fn start_edit_budget(&mut self) {
        let budget = self.tracker.state().budget;
        if budget == 0.0 {
            self.budget_input.clear();
        } else {
            self.budget_input.set_content(budget.to_string());
        }
        self.budget_input.focused = true;
        self.budget_mode = BudgetMode::Editing;
        self.input_mode = InputMode::BudgetEditor;
    }

    /// Save the budget editor; always returns to display mode
    pub fn save_budget(&mut self) {
        let input = self.budget_input.value().to_string();
        match self.tracker.save_budget(&input) {
            Ok(()) => {
                let label = self.tracker.balance().budget.clone();
                self.set_status(format!("Budget set to {}", label));
            }
            Err(BudgetError::InvalidBudget(_)) => {
                self.set_status(BUDGET_UNCHANGED_MESSAGE);
            }
            Err(e) => {
                self.notify(Notification::error(e.to_string()));
            }
        }
        self.finish_budget_edit();
        self.drain_storage_warning();
    }

    /// Close the budget editor without saving
    pub fn cancel_edit_budget(&mut self) {
        self.finish_budget_edit();
    }

    fn finish_budget_edit(&mut self) {
        self.budget_mode = BudgetMode::Display;
        self.budget_input.focused = false;
        self.input_mode = InputMode::Normal;
    }

    /// Ask before deleting the selected entry
    pub fn request_delete(&mut self) {
        let rows = self.tracker.list().rows();
        if let Some(row) = rows.get(self.selected_index) {
            let action = PendingAction::DeleteEntry { row: row.clone() };
            self.open_dialog(ActiveDialog::Confirm(action));
        }
    }

    /// Ask before resetting everything
    pub fn request_reset(&mut self) {
        self.open_dialog(ActiveDialog::Confirm(PendingAction::Reset));
    }

    /// Answer the open confirm dialog; anything but yes is a no-op
    pub fn answer_confirm(&mut self, confirmed: bool) {
        let dialog = std::mem::take(&mut self.active_dialog);
        let ActiveDialog::Confirm(action) = dialog else {
            self.active_dialog = dialog;
            return;
        };
        if !confirmed {
            return;
        }

        match action {
            PendingAction::DeleteEntry { row } => {
                if self.tracker.delete_entry(row.id).is_some() {
                    self.clamp_selection();
                    self.notify(Notification::info(format!("Deleted {}", row.description)));
                }
            }
            PendingAction::Reset => {
                self.tracker.reset();
                self.budget_mode = BudgetMode::Display;
                self.budget_input.clear();
                self.budget_input.focused = false;
                if self.input_mode == InputMode::BudgetEditor {
                    self.input_mode = InputMode::Normal;
                }
                self.selected_index = 0;
                self.notify(Notification::info("All data reset"));
            }
        }
        self.drain_storage_warning();
    }

    /// Switch between the narrow and wide layouts
    pub fn toggle_layout(&mut self) {
        let layout = self.tracker.toggle_layout();
        self.set_status(match layout {
            Layout::Normal => "Normal layout",
            Layout::Wide => "Wide layout",
        });
        self.drain_storage_warning();
    }

    /// Write a JSON backup into the export directory
    pub fn export(&mut self) {
        let today = Utc::now().date_naive();
        match self.tracker.export_to_dir(&self.export_dir, today) {
            Ok(path) => self.notify(Notification::success(format!("Exported to {}", path.display()))),
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.tracker.list().len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.tracker.list().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    fn drain_storage_warning(&mut self) {
        if let Some(warning) = self.tracker.take_storage_warning() {
            self.notify(Notification::warning(warning));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetState;
    use crate::services::TrackerOptions;
    use crate::storage::{MemoryStore, Store};
    use tempfile::TempDir;

    fn app() -> App<MemoryStore> {
        let tracker = Tracker::load(Store::new(MemoryStore::new()), TrackerOptions::default());
        App::new(tracker, PathBuf::from("exports"))
    }

    fn type_into(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.insert(c);
        }
    }

    fn add(app: &mut App<MemoryStore>, description: &str, amount: &str) {
        app.start_entry();
        type_into(&mut app.description_input, description);
        type_into(&mut app.amount_input, amount);
        app.submit_entry();
    }

    #[test]
    fn test_submit_entry_clears_form_and_focuses_description() {
        let mut app = app();
        app.start_entry();
        type_into(&mut app.description_input, "Coffee");
        app.next_field();
        assert_eq!(app.focused_field, FormField::Amount);
        type_into(&mut app.amount_input, "4.50");
        app.submit_entry();

        assert_eq!(app.tracker.state().len(), 1);
        assert!(app.description_input.is_empty());
        assert!(app.amount_input.is_empty());
        assert_eq!(app.focused_field, FormField::Description);
        assert!(app.description_input.focused);
        assert_eq!(app.input_mode, InputMode::EntryForm);
    }

    #[test]
    fn test_invalid_amount_alerts_and_keeps_inputs() {
        let mut app = app();
        add(&mut app, "Snack", "abc");

        assert_eq!(
            app.active_dialog,
            ActiveDialog::Alert(INVALID_AMOUNT_MESSAGE.to_string())
        );
        assert_eq!(app.description_input.value(), "Snack");
        assert_eq!(app.amount_input.value(), "abc");
        assert!(app.tracker.state().is_empty());
    }

    #[test]
    fn test_budget_editor_prefill() {
        let mut app = app();
        app.start_edit_budget();
        assert_eq!(app.budget_mode, BudgetMode::Editing);
        assert!(app.budget_input.is_empty());

        type_into(&mut app.budget_input, "500");
        app.save_budget();
        assert_eq!(app.budget_mode, BudgetMode::Display);
        assert_eq!(app.tracker.state().budget, 500.0);

        app.start_edit_budget();
        assert_eq!(app.budget_input.value(), "500");
    }

    #[test]
    fn test_invalid_budget_returns_to_display_without_alert() {
        let mut app = app();
        app.start_edit_budget();
        type_into(&mut app.budget_input, "-20");
        app.save_budget();

        assert_eq!(app.budget_mode, BudgetMode::Display);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(!app.has_dialog());
        assert_eq!(app.status_message.as_deref(), Some(BUDGET_UNCHANGED_MESSAGE));
        assert_eq!(app.tracker.state().budget, 0.0);
    }

    #[test]
    fn test_cancel_budget_edit() {
        let mut app = app();
        app.start_edit_budget();
        type_into(&mut app.budget_input, "999");
        app.cancel_edit_budget();

        assert_eq!(app.budget_mode, BudgetMode::Display);
        assert_eq!(app.tracker.state().budget, 0.0);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = app();
        add(&mut app, "Lunch", "12");
        app.leave_entry();

        app.request_delete();
        assert!(matches!(
            app.active_dialog,
            ActiveDialog::Confirm(PendingAction::DeleteEntry { .. })
        ));
        app.answer_confirm(false);
        assert!(!app.has_dialog());
        assert_eq!(app.tracker.state().len(), 1);

        app.request_delete();
        app.answer_confirm(true);
        assert!(app.tracker.state().is_empty());
        assert_eq!(app.tracker.list().full_renders(), 1);
    }

    #[test]
    fn test_delete_with_empty_list_opens_nothing() {
        let mut app = app();
        app.request_delete();
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_delete_selected_row() {
        let mut app = app();
        add(&mut app, "Coffee", "4.50");
        add(&mut app, "Lunch", "12");
        app.leave_entry();

        app.move_down();
        app.move_down();
        assert_eq!(app.selected_index, 1);

        app.request_delete();
        app.answer_confirm(true);
        assert_eq!(app.tracker.state().entries[0].description, "Lunch");
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_reset_clears_budget_editor() {
        let mut app = app();
        app.start_edit_budget();
        type_into(&mut app.budget_input, "100");
        app.save_budget();
        add(&mut app, "Taxi", "20");
        app.leave_entry();

        app.start_edit_budget();
        app.request_reset();
        app.answer_confirm(true);

        assert_eq!(*app.tracker.state(), BudgetState::reset());
        assert_eq!(app.budget_mode, BudgetMode::Display);
        assert!(app.budget_input.is_empty());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_reset_declined_is_noop() {
        let mut app = app();
        add(&mut app, "Taxi", "20");
        app.request_reset();
        app.answer_confirm(false);
        assert_eq!(app.tracker.state().len(), 1);
    }

    #[test]
    fn test_toggle_layout() {
        let mut app = app();
        app.toggle_layout();
        assert_eq!(app.tracker.layout(), Layout::Wide);
        app.toggle_layout();
        assert_eq!(app.tracker.layout(), Layout::Normal);
    }

    #[test]
    fn test_export_writes_backup() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app();
        app.export_dir = temp_dir.path().to_path_buf();
        app.export();

        let files: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn test_failed_save_surfaces_warning() {
        let mut app = app();
        app.tracker.store_mut().backend_mut().fail_writes = true;
        add(&mut app, "Gum", "1");

        assert_eq!(app.tracker.state().len(), 1);
        // success toast plus the storage warning
        assert_eq!(app.notifications.len(), 2);
    }
}
