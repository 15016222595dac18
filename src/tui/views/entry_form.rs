//! Entry form view
//!
//! Description and amount inputs for a new expense.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, InputMode};

/// Render the entry form
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let active = app.input_mode == InputMode::EntryForm;
    let border_color = if active { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" New expense ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height >= 1 {
        let row = Rect::new(inner.x, inner.y, inner.width, 1);
        frame.render_widget(&app.description_input, row);
    }
    if inner.height >= 2 {
        let row = Rect::new(inner.x, inner.y + 1, inner.width, 1);
        frame.render_widget(&app.amount_input, row);
    }
}
