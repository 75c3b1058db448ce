//! Pending card widget — the question waiting to be placed

use crate::board::state::BoardState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct PendingCardWidget<'a> {
    state: &'a BoardState,
}

impl<'a> PendingCardWidget<'a> {
    pub fn new(state: &'a BoardState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for PendingCardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let round = &self.state.round;
        let dim = Style::default().fg(Color::DarkGray);

        let (title, border, lines) = match round.pending() {
            Some(question) => {
                let hint = if round.is_validating() {
                    Span::styled("Checking placement...", Style::default().fg(Color::Yellow))
                } else if self.state.is_dragging() {
                    Span::styled("Release over a slot to place it", dim)
                } else {
                    Span::styled("Drag me onto the line, or pick a slot and press Enter", dim)
                };
                let border = if self.state.is_dragging() {
                    Color::Magenta
                } else if round.is_validating() {
                    Color::Yellow
                } else {
                    Color::Cyan
                };
                let lines = vec![
                    Line::from(Span::styled(
                        question.text.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("{} · {}", question.category, question.difficulty),
                        dim,
                    )),
                    Line::from(hint),
                ];
                (" Place this ", border, lines)
            }
            None if round.is_loading() => (
                " Question ",
                Color::DarkGray,
                vec![Line::from(Span::styled("Loading question...", dim))],
            ),
            None => (
                " Question ",
                Color::DarkGray,
                vec![Line::from(Span::styled("No question loaded. Press r to retry.", dim))],
            ),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
