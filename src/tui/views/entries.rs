//! Entry list view
//!
//! Draws the rows held by the tracker's entry list, newest first.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, InputMode};

/// Render the entry list
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let is_focused = app.input_mode == InputMode::Normal && !app.has_dialog();
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let rows = app.tracker.list().rows();
    let block = Block::default()
        .title(format!(" Expenses ({}) ", rows.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if rows.is_empty() {
        let text = Paragraph::new("No expenses yet. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Min(12),    // Description
        Constraint::Length(11), // Date
        Constraint::Length(12), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.description.as_str()),
                Cell::from(row.date.as_str()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(row.amount.as_str()).style(Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let table = Table::new(table_rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    if is_focused {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
