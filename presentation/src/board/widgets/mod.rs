//! Board widgets — ratatui components for the game layout
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Pending card (5) ──────────────────────────────┤
//! ├── Number line (flex) ────────────────────────────┤
//! ├── Message (1) ───────────────────────────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod game_over;
pub mod header;
pub mod help;
pub mod message;
pub mod number_line;
pub mod pending_card;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the board regions from a terminal area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub header: Rect,
    pub pending: Rect,
    pub line: Rect,
    pub message: Rect,
    pub status_bar: Rect,
}

impl BoardLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            pending: chunks[1],
            line: chunks[2],
            message: chunks[3],
            status_bar: chunks[4],
        }
    }

    /// Centered rectangle for overlays (help, game over)
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}
