//! Full-screen board (ratatui + crossterm)
//!
//! The pending question is a card that can be dragged with the mouse onto a
//! slot of the number line, or dropped on the keyboard-selected slot.

pub mod app;
pub mod keys;
pub mod state;
pub mod widgets;

pub use app::BoardApp;
pub use keys::{BoardAction, KeyHandler, Overlay};
pub use state::{BoardState, DragState, HitRegion};
