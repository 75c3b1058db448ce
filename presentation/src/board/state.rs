//! Board view state
//!
//! Wraps the [`RoundState`] with what only the terminal needs: the slot
//! selected by the keyboard, an ongoing mouse drag, and the hit regions
//! recorded by the last render.

use super::keys::{BoardAction, Overlay};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use numline_domain::{DragId, DropEvent, Effect, RoundEvent, RoundState};
use ratatui::layout::Rect;

/// Area of the last frame that belongs to a drag source or drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub area: Rect,
    pub target: DragId,
}

impl HitRegion {
    pub fn new(area: Rect, target: DragId) -> Self {
        Self { area, target }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }
}

/// The pending card is being dragged with the mouse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragState {
    /// Slot under the pointer, if any
    pub hover: Option<usize>,
}

#[derive(Debug, Default)]
pub struct BoardState {
    pub round: RoundState,
    /// Slot targeted by `Enter`
    pub selected: usize,
    pub drag: Option<DragState>,
    /// Rebuilt on every render, topmost last
    pub regions: Vec<HitRegion>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlay(&self) -> Overlay {
        if self.show_help {
            Overlay::Help
        } else if self.round.game_over().is_some() {
            Overlay::GameOver
        } else {
            Overlay::Board
        }
    }

    /// Apply a round event and keep the selection on the line
    pub fn apply(&mut self, event: RoundEvent) -> Option<Effect> {
        let effect = self.round.apply(event);
        self.selected = self.selected.min(self.round.line().len());
        if !self.round.is_draggable() {
            self.drag = None;
        }
        effect
    }

    /// Drop target or drag source at a terminal cell
    pub fn hit_test(&self, column: u16, row: u16) -> Option<DragId> {
        self.regions
            .iter()
            .rev()
            .find(|region| region.contains(column, row))
            .map(|region| region.target)
    }

    /// Slot highlighted while dragging
    pub fn hover_slot(&self) -> Option<usize> {
        self.drag.and_then(|drag| drag.hover)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Drop event for the keyboard-selected slot
    pub fn selected_drop(&self) -> Option<DropEvent> {
        let active = self.round.pending_drag_id()?;
        Some(DropEvent::over(
            active.to_string(),
            DragId::Slot(self.selected).to_string(),
        ))
    }

    /// Handle a key action; returns the round event it produces, if any
    pub fn on_action(&mut self, action: BoardAction) -> Option<RoundEvent> {
        let last_slot = self.round.line().len();
        match action {
            BoardAction::SelectPrevious => self.selected = self.selected.saturating_sub(1),
            BoardAction::SelectNext => self.selected = (self.selected + 1).min(last_slot),
            BoardAction::SelectFirst => self.selected = 0,
            BoardAction::SelectLast => self.selected = last_slot,
            BoardAction::DropSelected => {
                return self.selected_drop().map(RoundEvent::Dropped);
            }
            BoardAction::DismissGameOver => {
                if self.round.game_over().is_some() {
                    return Some(RoundEvent::DismissGameOver);
                }
            }
            BoardAction::RetryLoad => return Some(RoundEvent::Start),
            BoardAction::ToggleHelp => self.show_help = !self.show_help,
            BoardAction::CloseOverlay => self.show_help = false,
            BoardAction::Quit => self.should_quit = true,
            BoardAction::None => {}
        }
        None
    }

    /// Handle a mouse event; a release after a drag produces a drop
    pub fn on_mouse(&mut self, mouse: MouseEvent) -> Option<RoundEvent> {
        if self.overlay() != Overlay::Board {
            return None;
        }

        let target = self.hit_test(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match target {
                Some(DragId::Pending(_)) if self.round.is_draggable() => {
                    self.drag = Some(DragState::default());
                }
                Some(DragId::Slot(slot)) => self.selected = slot,
                _ => {}
            },
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.hover = match target {
                        Some(DragId::Slot(slot)) => Some(slot),
                        _ => None,
                    };
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag.take()?;
                let active = self.round.pending_drag_id()?;
                if let Some(DragId::Slot(slot)) = target {
                    self.selected = slot;
                }
                return Some(RoundEvent::Dropped(DropEvent::new(
                    active.to_string(),
                    target.map(|t| t.to_string()),
                )));
            }
            _ => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::question;
    use crossterm::event::KeyModifiers;
    use numline_domain::{PlacedCardId, PlacementVerdict, QuestionId};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// One placed card, question 2 pending, and regions for a tiny board
    fn board() -> BoardState {
        let mut state = BoardState::new();
        state.apply(RoundEvent::Start);
        state.apply(RoundEvent::QuestionLoaded(question(1)));
        state.apply(RoundEvent::Dropped(DropEvent::over("question-1", "slot-0")));
        state.apply(RoundEvent::PlacementJudged(PlacementVerdict::correct()));
        state.apply(RoundEvent::QuestionLoaded(question(2)));

        state.regions = vec![
            HitRegion::new(Rect::new(0, 0, 20, 3), DragId::Pending(QuestionId::new(2))),
            HitRegion::new(Rect::new(0, 5, 20, 1), DragId::Slot(0)),
            HitRegion::new(Rect::new(0, 6, 20, 1), DragId::Card(PlacedCardId::new(0))),
            HitRegion::new(Rect::new(0, 7, 20, 1), DragId::Slot(1)),
        ];
        state
    }

    #[test]
    fn test_hit_test() {
        let state = board();
        assert_eq!(state.hit_test(3, 1), Some(DragId::Pending(QuestionId::new(2))));
        assert_eq!(state.hit_test(19, 7), Some(DragId::Slot(1)));
        assert_eq!(state.hit_test(20, 7), None);
        assert_eq!(state.hit_test(0, 4), None);
    }

    #[test]
    fn test_selection_is_clamped_to_the_line() {
        let mut state = board();
        assert_eq!(state.on_action(BoardAction::SelectPrevious), None);
        assert_eq!(state.selected, 0);

        state.on_action(BoardAction::SelectNext);
        state.on_action(BoardAction::SelectNext);
        assert_eq!(state.selected, 1);

        state.on_action(BoardAction::SelectFirst);
        assert_eq!(state.selected, 0);
        state.on_action(BoardAction::SelectLast);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_enter_drops_on_selected_slot() {
        let mut state = board();
        state.on_action(BoardAction::SelectLast);
        assert_eq!(
            state.on_action(BoardAction::DropSelected),
            Some(RoundEvent::Dropped(DropEvent::over("question-2", "slot-1")))
        );
    }

    #[test]
    fn test_drop_without_pending_question_is_nothing() {
        let mut state = BoardState::new();
        assert_eq!(state.on_action(BoardAction::DropSelected), None);
    }

    #[test]
    fn test_mouse_drag_and_release_on_slot() {
        let mut state = board();
        assert_eq!(state.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 4, 1)), None);
        assert!(state.is_dragging());

        state.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 4, 7));
        assert_eq!(state.hover_slot(), Some(1));

        let event = state.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 4, 7));
        assert_eq!(
            event,
            Some(RoundEvent::Dropped(DropEvent::over("question-2", "slot-1")))
        );
        assert!(!state.is_dragging());
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_release_outside_targets_has_no_over_id() {
        let mut state = board();
        state.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 4, 1));
        let event = state.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 40, 20));
        assert_eq!(
            event,
            Some(RoundEvent::Dropped(DropEvent::new("question-2", None)))
        );
    }

    #[test]
    fn test_release_on_card_names_the_card() {
        let mut state = board();
        state.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 4, 1));
        let event = state.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 4, 6));
        assert_eq!(
            event,
            Some(RoundEvent::Dropped(DropEvent::over("question-2", "card-0")))
        );
    }

    #[test]
    fn test_release_without_drag_is_ignored() {
        let mut state = board();
        assert_eq!(state.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 4, 7)), None);
    }

    #[test]
    fn test_click_on_slot_selects_it() {
        let mut state = board();
        state.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 2, 7));
        assert_eq!(state.selected, 1);
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_no_drag_while_validating() {
        let mut state = board();
        let effect = state.apply(RoundEvent::Dropped(DropEvent::over("question-2", "slot-0")));
        assert!(matches!(effect, Some(Effect::ValidatePlacement(_))));

        state.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 4, 1));
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_game_over_overlay_and_dismiss() {
        let mut state = board();
        state.on_action(BoardAction::SelectLast);
        state.apply(RoundEvent::Dropped(DropEvent::over("question-2", "slot-1")));
        state.apply(RoundEvent::PlacementJudged(PlacementVerdict::incorrect()));

        assert_eq!(state.overlay(), Overlay::GameOver);
        assert_eq!(state.selected, 0);
        assert_eq!(
            state.on_action(BoardAction::DismissGameOver),
            Some(RoundEvent::DismissGameOver)
        );

        state.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 4, 1));
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_help_overlay_toggles() {
        let mut state = board();
        state.on_action(BoardAction::ToggleHelp);
        assert_eq!(state.overlay(), Overlay::Help);
        state.on_action(BoardAction::CloseOverlay);
        assert_eq!(state.overlay(), Overlay::Board);
    }

    #[test]
    fn test_quit() {
        let mut state = BoardState::new();
        state.on_action(BoardAction::Quit);
        assert!(state.should_quit);
    }
}
