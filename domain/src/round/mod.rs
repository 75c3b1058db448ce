//! The placement round: state, events, effects and the transition between them.

pub mod event;
pub mod state;

pub use event::{DropEvent, Effect, PlacementRequest, PlacementVerdict, RoundEvent};
pub use state::{
    GameOver, InFlightPlacement, LOAD_FAILED_MESSAGE, RoundState, WRONG_PLACEMENT_MESSAGE,
};
