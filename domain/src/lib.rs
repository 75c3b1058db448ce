//! Domain layer for numline
//!
//! This crate contains the core game logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## The number line
//!
//! Placed questions form a [`Line`] bounded by the sentinels `0` and `∞`.
//! The gaps between them are slots; a slot's neighbours are what the
//! placement oracle compares the new question against.
//!
//! ## The round
//!
//! [`RoundState::apply`] consumes a [`RoundEvent`] and returns the
//! [`Effect`] the caller has to perform (fetch a question, validate a
//! placement). The result of the effect is fed back as the next event.

pub mod core;
pub mod line;
pub mod round;

// Re-export commonly used types
pub use self::core::{
    error::DomainError,
    question::{Difficulty, Question, QuestionDetail, QuestionId},
};
pub use line::{Boundary, DragId, Line, Neighbors, PlacedCard, PlacedCardId, Position};
pub use round::{
    DropEvent, Effect, GameOver, InFlightPlacement, PlacementRequest, PlacementVerdict,
    RoundEvent, RoundState,
};
