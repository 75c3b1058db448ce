//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod placement_oracle;
pub mod question_source;
pub mod round_logger;
pub mod service_error;
