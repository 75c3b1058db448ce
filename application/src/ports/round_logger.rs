//! Port for structured round logging.
//!
//! Defines the [`RoundLogger`] trait for recording what happened during a
//! game (drops, verdicts, faults) to a machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the game
//! transcript (JSONL).

use serde_json::Value;

/// A structured round event for logging.
pub struct RoundLogEvent {
    /// Event type identifier (e.g., "drop", "placement_judged", "game_over").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl RoundLogEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging round events.
///
/// `log` is synchronous and non-fallible; logging failures never interrupt
/// the game.
pub trait RoundLogger: Send + Sync {
    fn log(&self, event: RoundLogEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoRoundLogger;

impl RoundLogger for NoRoundLogger {
    fn log(&self, _event: RoundLogEvent) {}
}
