//! Layout definitions for the TUI
//!
//! Normal layout is a single centered column. Wide layout uses the full width
//! with the budget and entry form on the left and the entry list on the right.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::services::Layout as ViewLayout;

/// Width of the centered column in the normal layout
pub const NORMAL_COLUMN_WIDTH: u16 = 64;

/// Width of the left pane in the wide layout
pub const WIDE_SIDE_WIDTH: u16 = 44;

/// Layout regions for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Budget and balance summary
    pub summary: Rect,
    /// Description and amount inputs
    pub form: Rect,
    /// Entry list
    pub entries: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect, layout: ViewLayout) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);
        let main = vertical[0];

        match layout {
            ViewLayout::Normal => {
                let column = centered_column(NORMAL_COLUMN_WIDTH, main);
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(5), // Summary
                        Constraint::Length(4), // Form
                        Constraint::Min(3),    // Entries
                    ])
                    .split(column);

                Self {
                    summary: chunks[0],
                    form: chunks[1],
                    entries: chunks[2],
                    status_bar: vertical[1],
                }
            }
            ViewLayout::Wide => {
                let horizontal = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Length(WIDE_SIDE_WIDTH),
                        Constraint::Min(30),
                    ])
                    .split(main);

                let side = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(5), // Summary
                        Constraint::Length(4), // Form
                        Constraint::Min(0),
                    ])
                    .split(horizontal[0]);

                Self {
                    summary: side[0],
                    form: side[1],
                    entries: horizontal[1],
                    status_bar: vertical[1],
                }
            }
        }
    }
}

/// A full-height column of at most `width`, centered horizontally
pub fn centered_column(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let x = r.x + (r.width - width) / 2;
    Rect::new(x, r.y, width, r.height)
}

/// Create a centered rect sized as a percentage of `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_layout_is_centered_column() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = AppLayout::new(area, ViewLayout::Normal);

        assert_eq!(layout.entries.width, NORMAL_COLUMN_WIDTH);
        assert_eq!(layout.entries.x, (120 - NORMAL_COLUMN_WIDTH) / 2);
        assert_eq!(layout.summary.x, layout.entries.x);
        assert_eq!(layout.status_bar.y, 39);
    }

    #[test]
    fn test_wide_layout_uses_two_panes() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = AppLayout::new(area, ViewLayout::Wide);

        assert_eq!(layout.summary.x, 0);
        assert_eq!(layout.entries.x, WIDE_SIDE_WIDTH);
        assert_eq!(layout.entries.width, 120 - WIDE_SIDE_WIDTH);
        assert_eq!(layout.entries.height, 39);
    }

    #[test]
    fn test_narrow_terminal() {
        let area = Rect::new(0, 0, 40, 20);
        let layout = AppLayout::new(area, ViewLayout::Normal);
        assert_eq!(layout.entries.width, 40);
    }

    #[test]
    fn test_centered_rect_fixed() {
        let r = centered_rect_fixed(50, 7, Rect::new(0, 0, 100, 21));
        assert_eq!(r, Rect::new(25, 7, 50, 7));
    }
}
