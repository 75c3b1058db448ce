//! Game-over modal — final score and the answers revealed by the oracle

use numline_domain::GameOver;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct GameOverWidget<'a> {
    summary: &'a GameOver,
    best_score: u32,
}

impl<'a> GameOverWidget<'a> {
    pub fn new(summary: &'a GameOver, best_score: u32) -> Self {
        Self {
            summary,
            best_score,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let label = Style::default().fg(Color::Cyan);
        let mut lines = vec![
            Line::from(Span::styled(
                "Wrong placement!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final score: ", label),
                Span::styled(
                    self.summary.final_score.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled("   Best: ", label),
                Span::raw(self.best_score.to_string()),
            ]),
        ];

        let answers = [
            ("Your card", self.summary.placed_answer),
            ("Left neighbour", self.summary.left_answer),
            ("Right neighbour", self.summary.right_answer),
        ];
        if answers.iter().any(|(_, answer)| answer.is_some()) {
            lines.push(Line::from(""));
        }
        for (name, answer) in answers {
            if let Some(answer) = answer {
                lines.push(Line::from(vec![
                    Span::styled(format!("{name}: "), label),
                    Span::raw(answer.to_string()),
                ]));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press n to start a new game",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl<'a> Widget for GameOverWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Game over ")
                    .border_style(Style::default().fg(Color::Red)),
            )
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_revealed_answers_are_listed() {
        let summary = GameOver {
            final_score: 3,
            placed_answer: Some(1969),
            left_answer: None,
            right_answer: Some(1961),
        };
        let text: Vec<String> = GameOverWidget::new(&summary, 5)
            .lines()
            .iter()
            .map(|line| line.to_string())
            .collect();

        assert!(text.iter().any(|l| l == "Final score: 3   Best: 5"));
        assert!(text.iter().any(|l| l == "Your card: 1969"));
        assert!(text.iter().any(|l| l == "Right neighbour: 1961"));
        assert!(!text.iter().any(|l| l.starts_with("Left neighbour")));
    }
}
