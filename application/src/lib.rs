//! Application layer for numline
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    placement_oracle::PlacementOracle,
    question_source::QuestionSource,
    round_logger::{NoRoundLogger, RoundLogEvent, RoundLogger},
    service_error::ServiceError,
};
pub use use_cases::game_session::GameSession;
pub use use_cases::lookup_question::LookupQuestionUseCase;
pub use use_cases::round_log::records_for;
pub use use_cases::run_effect::EffectRunner;
