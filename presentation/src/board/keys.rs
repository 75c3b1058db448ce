//! Key bindings for the board
//!
//! Keys map to a [`BoardAction`] depending on which [`Overlay`] is on top:
//! - Board: move the selected slot, drop, retry, help
//! - Help: close it
//! - GameOver: start a new game

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What currently receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Board,
    Help,
    GameOver,
}

impl Overlay {
    /// Indicator shown at the left of the status bar
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Board => "PLAY",
            Self::Help => "HELP",
            Self::GameOver => "OVER",
        }
    }

    /// Key hints shown at the right of the status bar
    pub fn hints(&self) -> &'static str {
        match self {
            Self::Board => "←/→:slot  Enter:drop  drag:mouse  r:retry  ?:help  q:quit",
            Self::Help => "?/Esc:close  Ctrl+C:quit",
            Self::GameOver => "n/Enter:new game  q:quit",
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Drop the pending card on the selected slot
    DropSelected,
    DismissGameOver,
    /// Request a question again after a failed load
    RetryLoad,
    ToggleHelp,
    CloseOverlay,
    Quit,
    None,
}

/// Key event handler - maps key events to actions based on the overlay
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(overlay: Overlay, key: KeyEvent) -> BoardAction {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return BoardAction::Quit;
        }

        match overlay {
            Overlay::Board => Self::handle_board(key),
            Overlay::Help => Self::handle_help(key),
            Overlay::GameOver => Self::handle_game_over(key),
        }
    }

    fn handle_board(key: KeyEvent) -> BoardAction {
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                BoardAction::SelectPrevious
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                BoardAction::SelectNext
            }
            KeyCode::Home | KeyCode::Char('g') => BoardAction::SelectFirst,
            KeyCode::End | KeyCode::Char('G') => BoardAction::SelectLast,
            KeyCode::Enter | KeyCode::Char(' ') => BoardAction::DropSelected,
            KeyCode::Char('n') => BoardAction::DismissGameOver,
            KeyCode::Char('r') => BoardAction::RetryLoad,
            KeyCode::Char('?') => BoardAction::ToggleHelp,
            KeyCode::Char('q') => BoardAction::Quit,
            _ => BoardAction::None,
        }
    }

    fn handle_help(key: KeyEvent) -> BoardAction {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => BoardAction::CloseOverlay,
            _ => BoardAction::None,
        }
    }

    fn handle_game_over(key: KeyEvent) -> BoardAction {
        match key.code {
            KeyCode::Char('n') | KeyCode::Enter | KeyCode::Char(' ') => {
                BoardAction::DismissGameOver
            }
            KeyCode::Char('?') => BoardAction::ToggleHelp,
            KeyCode::Char('q') => BoardAction::Quit,
            _ => BoardAction::None,
        }
    }
}
