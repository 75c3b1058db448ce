//! Status bar widget — overlay indicator + key hints

use crate::board::keys::Overlay;
use crate::board::state::BoardState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a BoardState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a BoardState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let overlay = self.state.overlay();
        let indicator = overlay.indicator();
        let indicator_color = if self.state.round.is_validating() {
            Color::Yellow
        } else {
            match overlay {
                Overlay::Board => Color::Green,
                Overlay::Help => Color::Cyan,
                Overlay::GameOver => Color::Red,
            }
        };
        let indicator_span = Span::styled(
            format!(" {} ", indicator),
            Style::default()
                .fg(Color::Black)
                .bg(indicator_color)
                .add_modifier(Modifier::BOLD),
        );
        let indicator_width = indicator.len() as u16 + 2;
        buf.set_line(area.x, area.y, &Line::from(indicator_span), indicator_width);

        let hints = overlay.hints();
        let hints_width = hints.chars().count() as u16;
        let hints_x = area.right().saturating_sub(hints_width + 1);
        if hints_x > area.x + indicator_width {
            let hints_line = Line::from(Span::styled(hints, bg_style));
            buf.set_line(hints_x, area.y, &hints_line, hints_width + 1);
        }
    }
}
