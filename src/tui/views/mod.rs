//! TUI Views module
//!
//! Contains the budget summary, entry form, entry list and status bar, and
//! draws whichever dialog or notification is on top.

pub mod entries;
pub mod entry_form;
pub mod status_bar;
pub mod summary;

use ratatui::{layout::Rect, Frame};

use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let layout = AppLayout::new(frame.area(), app.tracker.layout());

    summary::render(frame, app, layout.summary);
    entry_form::render(frame, app, layout.form);
    entries::render(frame, app, layout.entries);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(notification, notification_area(frame.area()));
    }

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    match &app.active_dialog {
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::Alert(message) => {
            dialogs::alert::render(frame, message);
        }
        ActiveDialog::Confirm(action) => {
            dialogs::confirm::render(frame, app, action);
        }
        ActiveDialog::None => {}
    }
}

/// Top-right corner box for toasts
fn notification_area(area: Rect) -> Rect {
    let width = 40.min(area.width);
    let height = 4.min(area.height);
    Rect::new(area.x + area.width - width, area.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{Tracker, TrackerOptions};
    use crate::storage::{MemoryStore, Store};
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    fn screen(app: &App<MemoryStore>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app() -> App<MemoryStore> {
        let tracker = Tracker::load(Store::new(MemoryStore::new()), TrackerOptions::default());
        App::new(tracker, PathBuf::from("exports"))
    }

    #[test]
    fn test_renders_balance_and_entries() {
        let mut app = app();
        app.tracker.save_budget("500").unwrap();
        app.tracker.add_entry("Coffee", "4.50").unwrap();
        app.tracker.add_entry("Lunch", "12.00").unwrap();

        let text = screen(&app, 100, 30);
        assert!(text.contains("$500.00"));
        assert!(text.contains("$483.50"));
        assert!(text.contains("Lunch"));
        assert!(text.contains("-$4.50"));
        assert!(text.find("Lunch") < text.find("Coffee"));
    }

    #[test]
    fn test_renders_wide_layout() {
        let mut app = app();
        app.toggle_layout();
        let text = screen(&app, 120, 30);
        assert!(text.contains("No expenses yet"));
        assert!(text.contains("wide"));
    }

    #[test]
    fn test_renders_confirm_dialog() {
        let mut app = app();
        app.request_reset();
        let text = screen(&app, 100, 30);
        assert!(text.contains("Confirm"));
        assert!(text.contains("[Y]"));
        assert!(text.contains("0 expenses will be cleared"));
    }

    #[test]
    fn test_delete_confirm_shows_entry_details() {
        let mut app = app();
        app.tracker.save_budget("20").unwrap();
        let entry = app.tracker.add_entry("Lunch", "12").unwrap();
        app.request_delete();

        let text = screen(&app, 100, 30);
        assert!(text.contains("Delete this expense?"));
        assert!(text.contains(&entry.date));
        assert!(text.contains("-$12.00"));
        assert!(text.contains("Remaining becomes $20.00"));
    }

    #[test]
    fn test_renders_alert() {
        let mut app = app();
        app.open_dialog(ActiveDialog::Alert("Please enter a valid amount.".into()));
        let text = screen(&app, 100, 30);
        assert!(text.contains("Please enter a valid amount."));
    }
}
