//! Logging infrastructure — structured round logging.
//!
//! Provides [`JsonlRoundLogger`], a JSONL file writer that implements
//! the [`RoundLogger`](numline_application::RoundLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlRoundLogger;
