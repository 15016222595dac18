//! Status bar view
//!
//! Shows the remaining balance, the current status note and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, InputMode};

/// Key hints for the current input mode
pub fn hints(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Normal => " a:Add  b:Budget  d:Delete  R:Reset  w:Layout  x:Export  ?:Help  q:Quit ",
        InputMode::EntryForm => " Tab:Next field  Enter:Add  Esc:Done ",
        InputMode::BudgetEditor => " Enter:Save  Esc:Cancel ",
    }
}

/// Render the status bar
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let balance = app.tracker.balance();
    let remaining_color = if balance.overspent {
        Color::Red
    } else {
        Color::Green
    };

    let mut spans = vec![
        Span::styled(" Left: ", Style::default().fg(Color::White)),
        Span::styled(
            balance.remaining.as_str(),
            Style::default()
                .fg(remaining_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            app.tracker.layout().to_string(),
            Style::default().fg(Color::Cyan),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = hints(app.input_mode);
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
