//! Confirmation dialog
//!
//! Guards delete and reset. A delete shows the entry being removed and what
//! the remaining balance becomes; a reset shows everything it will clear.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::display::EntryRow;
use crate::models::Money;
use crate::storage::KeyValueStore;
use crate::tui::app::{App, PendingAction};
use crate::tui::layout::centered_rect_fixed;

/// Render the confirmation for a pending action
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, action: &PendingAction) {
    let mut lines = vec![Line::from("")];
    match action {
        PendingAction::DeleteEntry { row } => lines.extend(delete_lines(app, row)),
        PendingAction::Reset => lines.extend(reset_lines(app)),
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Y]", Style::default().fg(Color::Green)),
        Span::raw(" Yes  "),
        Span::styled("[N]", Style::default().fg(Color::Red)),
        Span::raw(" No  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]));

    let area = centered_rect_fixed(52, lines.len() as u16 + 2, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn delete_lines<S: KeyValueStore>(app: &App<S>, row: &EntryRow) -> Vec<Line<'static>> {
    let state = app.tracker.state();
    let mut lines = vec![
        Line::from("Delete this expense?"),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", row.description),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("  {}  ", row.date), Style::default().fg(Color::DarkGray)),
            Span::styled(row.amount.clone(), Style::default().fg(Color::Red)),
        ]),
    ];

    if let Some(entry) = state.find_entry(row.id) {
        let after = Money::new(state.remaining() + entry.amount);
        lines.push(Line::from(vec![
            Span::raw("Remaining becomes "),
            Span::styled(
                after.format_with_symbol(app.tracker.currency_symbol()),
                Style::default().fg(if after.is_negative() {
                    Color::Red
                } else {
                    Color::Green
                }),
            ),
        ]));
    }
    lines
}

fn reset_lines<S: KeyValueStore>(app: &App<S>) -> Vec<Line<'static>> {
    let state = app.tracker.state();
    let count = state.len();
    let noun = if count == 1 { "expense" } else { "expenses" };

    vec![
        Line::from("Reset all data?"),
        Line::from(""),
        Line::from(format!(
            "Budget {} and {} {} will be cleared.",
            app.tracker.balance().budget,
            count,
            noun
        )),
        Line::from(Span::styled(
            "This cannot be undone.",
            Style::default().fg(Color::Red),
        )),
    ]
}
