//! Budget summary view
//!
//! Shows the budget, total spent and remaining balance, or the budget editor
//! while the budget is being edited.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, BudgetMode};

/// Render the summary panel
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let editing = app.budget_mode == BudgetMode::Editing;
    let border_color = if editing { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Budget ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let balance = app.tracker.balance();
    let remaining_color = if balance.overspent {
        Color::Red
    } else {
        Color::Green
    };

    let budget_line = Rect::new(inner.x, inner.y, inner.width, 1);
    if editing {
        frame.render_widget(&app.budget_input, budget_line);
    } else {
        let line = Line::from(vec![
            Span::styled("Budget:    ", Style::default().fg(Color::White)),
            Span::styled(
                balance.budget.as_str(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), budget_line);
    }

    let mut lines = vec![Line::from(vec![
        Span::styled("Spent:     ", Style::default().fg(Color::White)),
        Span::raw(balance.spent.as_str()),
    ])];

    let mut remaining = vec![
        Span::styled("Remaining: ", Style::default().fg(Color::White)),
        Span::styled(
            balance.remaining.as_str(),
            Style::default()
                .fg(remaining_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if balance.overspent {
        remaining.push(Span::styled("  over budget", Style::default().fg(Color::Red)));
    }
    lines.push(Line::from(remaining));

    let rest = Rect::new(
        inner.x,
        inner.y + 1,
        inner.width,
        inner.height.saturating_sub(1),
    );
    frame.render_widget(Paragraph::new(lines), rest);
}
