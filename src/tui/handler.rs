//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStore>(app: &mut App<S>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::EntryForm => handle_entry_form_key(app, key),
        InputMode::BudgetEditor => handle_budget_editor_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('a') | KeyCode::Char('i') => app.start_entry(),
        KeyCode::Char('b') | KeyCode::Char('e') => app.start_edit_budget(),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_index = app.tracker.list().len().saturating_sub(1);
        }

        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('R') => app.request_reset(),
        KeyCode::Char('w') => app.toggle_layout(),
        KeyCode::Char('x') => app.export(),
        KeyCode::Esc => app.clear_status(),

        _ => {}
    }
    Ok(())
}

/// Handle keys while typing a new entry
fn handle_entry_form_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.leave_entry(),
        KeyCode::Tab | KeyCode::BackTab => app.next_field(),
        KeyCode::Enter => app.submit_entry(),
        _ => edit_text(app, key),
    }
    Ok(())
}

/// Handle keys while editing the budget
fn handle_budget_editor_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.cancel_edit_budget(),
        KeyCode::Enter => app.save_budget(),
        _ => edit_text(app, key),
    }
    Ok(())
}

/// Handle keys when a dialog is open
fn handle_dialog_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Alert(_) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.close_dialog();
            }
        }
        ActiveDialog::Confirm(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.answer_confirm(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.answer_confirm(false),
            _ => {}
        },
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Send an editing key to the focused input
fn edit_text<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    let Some(input) = app.active_input() else {
        return;
    };
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{Tracker, TrackerOptions};
    use crate::storage::{MemoryStore, Store};
    use crate::tui::app::{BudgetMode, INVALID_AMOUNT_MESSAGE};
    use std::path::PathBuf;

    fn app() -> App<MemoryStore> {
        let tracker = Tracker::load(Store::new(MemoryStore::new()), TrackerOptions::default());
        App::new(tracker, PathBuf::from("exports"))
    }

    fn press(app: &mut App<MemoryStore>, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App<MemoryStore>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_entry_with_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Coffee");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "4.50");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.tracker.state().len(), 1);
        assert_eq!(app.tracker.state().entries[0].description, "Coffee");
        assert_eq!(app.input_mode, InputMode::EntryForm);

        // letters typed in the form never trigger commands
        type_text(&mut app, "quit");
        assert!(!app.should_quit);
        assert_eq!(app.description_input.value(), "quit");
    }

    #[test]
    fn test_bad_amount_alert_is_dismissed_with_enter() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "x");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Alert(INVALID_AMOUNT_MESSAGE.to_string())
        );

        // typing does not leak into the form while the alert is up
        type_text(&mut app, "5");
        assert_eq!(app.amount_input.value(), "x");

        press(&mut app, KeyCode::Enter);
        assert!(!app.has_dialog());
        assert_eq!(app.amount_input.value(), "x");
    }

    #[test]
    fn test_edit_budget_with_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('b'));
        type_text(&mut app, "250");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tracker.state().budget, 250.0);
        assert_eq!(app.budget_mode, BudgetMode::Display);

        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.tracker.state().budget, 250.0);
    }

    #[test]
    fn test_delete_confirm_with_keys() {
        let mut app = app();
        app.tracker.add_entry("Tea", "2").unwrap();

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('x'));
        assert!(app.has_dialog());
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.tracker.state().len(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.tracker.state().is_empty());
    }

    #[test]
    fn test_reset_with_keys() {
        let mut app = app();
        app.tracker.save_budget("40").unwrap();
        press(&mut app, KeyCode::Char('R'));
        press(&mut app, KeyCode::Char('Y'));
        assert_eq!(app.tracker.state().budget, 0.0);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }
}
