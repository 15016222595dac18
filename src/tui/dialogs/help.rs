//! Help dialog
//!
//! Lists the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.tracker.layout().is_wide()))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(wide: bool) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Keys"),
        Line::from(""),
        key_line("q", "Quit"),
        key_line("?", "Show/hide help"),
        key_line("j/k", "Move selection down/up"),
        key_line("a/i", "Add an expense"),
        key_line("b/e", "Edit the budget"),
        key_line("d/Del", "Delete the selected expense"),
        key_line("R", "Reset budget and expenses"),
        key_line("w", if wide { "Switch to normal layout" } else { "Switch to wide layout" }),
        key_line("x", "Export a JSON backup"),
        Line::from(""),
        heading("Adding an expense"),
        Line::from(""),
        key_line("Tab", "Switch between description and amount"),
        key_line("Enter", "Add the expense"),
        key_line("Esc", "Back to the list"),
        Line::from(""),
        heading("Editing the budget"),
        Line::from(""),
        key_line("Enter", "Save"),
        key_line("Esc", "Cancel"),
    ];

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>8}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
