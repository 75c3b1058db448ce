//! The number line the player builds, bounded by `0` and `∞`.

pub mod entities;
pub mod value_objects;

pub use entities::{Line, PlacedCard, PlacedCardId};
pub use value_objects::{Boundary, DragId, Neighbors, Position};
