//! Number line widget — `0`, the slots, the placed cards and `∞`, top to bottom
//!
//! Rows are laid out by [`NumberLineLayout`] so the same geometry serves both
//! rendering and mouse hit-testing.

use crate::board::state::{BoardState, HitRegion};
use numline_domain::{Boundary, DragId, Line as NumberLine, PlacedCard, Position};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// What a visible row shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Boundary(Boundary),
    Slot(usize),
    /// Index into the line's cards
    Card(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRow {
    pub area: Rect,
    pub kind: RowKind,
}

/// Visible rows of the number line inside a bordered area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLineLayout {
    pub rows: Vec<LineRow>,
    /// Rows hidden above the first visible one
    pub offset: usize,
    pub total: usize,
}

impl NumberLineLayout {
    /// Lay out `line` in `area`, scrolled so the row of slot `focus` is visible
    pub fn compute(line: &NumberLine, area: Rect, focus: usize) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let mut cards_seen = 0;
        let kinds: Vec<RowKind> = line
            .positions()
            .into_iter()
            .map(|position| match position {
                Position::Boundary(boundary) => RowKind::Boundary(boundary),
                Position::Slot(index) => RowKind::Slot(index),
                Position::Card(_) => {
                    cards_seen += 1;
                    RowKind::Card(cards_seen - 1)
                }
            })
            .collect();

        let total = kinds.len();
        let visible = inner.height as usize;
        let offset = if total <= visible {
            0
        } else {
            // Slot `i` sits on row `2i + 1`
            let focus_row = (focus.min(line.len()) * 2 + 1).min(total - 1);
            focus_row.saturating_sub(visible / 2).min(total - visible)
        };

        let rows = kinds
            .into_iter()
            .skip(offset)
            .take(visible)
            .enumerate()
            .map(|(i, kind)| LineRow {
                area: Rect::new(inner.x, inner.y + i as u16, inner.width, 1),
                kind,
            })
            .collect();

        Self {
            rows,
            offset,
            total,
        }
    }

    /// Drop targets and cards for mouse hit-testing
    pub fn hit_regions(&self, line: &NumberLine) -> Vec<HitRegion> {
        self.rows
            .iter()
            .filter_map(|row| match row.kind {
                RowKind::Slot(index) => Some(HitRegion::new(row.area, DragId::Slot(index))),
                RowKind::Card(index) => line
                    .cards()
                    .get(index)
                    .map(|card| HitRegion::new(row.area, DragId::Card(card.id))),
                RowKind::Boundary(_) => None,
            })
            .collect()
    }
}

pub struct NumberLineWidget<'a> {
    state: &'a BoardState,
    layout: &'a NumberLineLayout,
}

impl<'a> NumberLineWidget<'a> {
    pub fn new(state: &'a BoardState, layout: &'a NumberLineLayout) -> Self {
        Self { state, layout }
    }

    fn boundary_line(boundary: Boundary, width: u16) -> Line<'static> {
        let label = format!(" {} ", boundary.label());
        let rule = "━".repeat((width as usize).saturating_sub(label.chars().count() + 2) / 2);
        Line::from(vec![
            Span::styled(rule.clone(), Style::default().fg(Color::DarkGray)),
            Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(rule, Style::default().fg(Color::DarkGray)),
        ])
    }

    fn slot_line(&self, index: usize) -> Line<'static> {
        let round = &self.state.round;
        let checking = round.in_flight().is_some_and(|f| f.slot == index);
        let hovered = self.state.hover_slot() == Some(index);
        let selected = !self.state.is_dragging() && self.state.selected == index;

        let (text, style) = if checking {
            (
                format!("  ⋯ checking slot {index} ⋯"),
                Style::default().fg(Color::Yellow),
            )
        } else if hovered {
            (
                format!("  ▶ drop here (slot {index})"),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
        } else if selected {
            (
                format!("  ▶ slot {index}"),
                Style::default().add_modifier(Modifier::REVERSED),
            )
        } else {
            (
                format!("  ┄ slot {index}"),
                Style::default().fg(Color::DarkGray),
            )
        };
        Line::from(Span::styled(text, style))
    }

    fn card_line(position: usize, card: &PlacedCard) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!(" {:>2} │ ", position + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                card.question.text.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", card.question.category),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }
}

impl<'a> Widget for NumberLineWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = self.state.round.line();
        let title = if self.layout.total > self.layout.rows.len() {
            format!(
                " Number line ({} cards, {}/{}) ",
                line.len(),
                self.layout.offset + 1,
                self.layout.total
            )
        } else {
            format!(" Number line ({} cards) ", line.len())
        };

        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(if self.state.is_dragging() {
                Color::Magenta
            } else {
                Color::White
            }))
            .render(area, buf);

        for row in &self.layout.rows {
            let rendered = match row.kind {
                RowKind::Boundary(boundary) => Self::boundary_line(boundary, row.area.width),
                RowKind::Slot(index) => self.slot_line(index),
                RowKind::Card(index) => match line.cards().get(index) {
                    Some(card) => Self::card_line(index, card),
                    None => continue,
                },
            };
            buf.set_line(row.area.x, row.area.y, &rendered, row.area.width);
        }
    }
}
