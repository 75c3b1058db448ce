//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Widget for rendering help overlay
pub struct HelpWidget;

impl HelpWidget {
    pub fn new() -> Self {
        Self
    }

    fn key(key: &'static str, description: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Yellow)),
            Span::raw(description),
        ])
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let heading = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        vec![
            Line::from(Span::styled("How to play", heading)),
            Line::from(""),
            Line::from("Every question has a numeric answer you never see."),
            Line::from("Drop it between the cards whose answers bracket it."),
            Line::from("A wrong placement ends the game and clears the line."),
            Line::from(""),
            Line::from(Span::styled("Mouse", heading)),
            Line::from(""),
            Self::key("drag", "Pick up the question card and release it on a slot"),
            Self::key("click", "Select a slot"),
            Line::from(""),
            Line::from(Span::styled("Keyboard", heading)),
            Line::from(""),
            Self::key("←/→ h/l", "Move the selected slot"),
            Self::key("Home/End", "First / last slot"),
            Self::key("Enter/Space", "Drop the question on the selected slot"),
            Self::key("n", "Start a new game after a wrong placement"),
            Self::key("r", "Retry loading a question"),
            Self::key("?", "Toggle this help"),
            Self::key("q, Ctrl+C", "Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "Press ? or Esc to close",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Self::build_help_text())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

impl Default for HelpWidget {
    fn default() -> Self {
        Self::new()
    }
}
