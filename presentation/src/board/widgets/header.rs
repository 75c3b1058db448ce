//! Header widget — shows score, best score and what the round is waiting on

use crate::board::state::BoardState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a BoardState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a BoardState) -> Self {
        Self { state }
    }

    fn status(&self) -> (&'static str, Color) {
        let round = &self.state.round;
        if round.game_over().is_some() {
            ("Game over", Color::Red)
        } else if round.is_validating() {
            ("Checking placement", Color::Yellow)
        } else if round.is_loading() {
            ("Loading question", Color::Yellow)
        } else if self.state.is_dragging() {
            ("Dragging", Color::Magenta)
        } else if round.pending().is_some() {
            ("Ready", Color::Green)
        } else {
            ("Idle", Color::DarkGray)
        }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let round = &self.state.round;
        let (status, status_color) = self.status();
        let bold = Style::default().add_modifier(Modifier::BOLD);

        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(status_color)),
            Span::raw("Score: "),
            Span::styled(round.score().to_string(), bold.fg(Color::Cyan)),
            Span::raw(" | Best: "),
            Span::styled(round.best_score().to_string(), bold.fg(Color::Cyan)),
            Span::raw(" | "),
            Span::styled(status, Style::default().fg(status_color)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" numline ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
