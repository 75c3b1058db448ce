//! Message line — the round's transient status message

use crate::board::state::BoardState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct MessageWidget<'a> {
    state: &'a BoardState,
}

impl<'a> MessageWidget<'a> {
    pub fn new(state: &'a BoardState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for MessageWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(message) = self.state.round.message() else {
            return;
        };

        let color = if message.starts_with("Correct") {
            Color::Green
        } else {
            Color::Red
        };
        let line = Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(line).render(area, buf);
    }
}
