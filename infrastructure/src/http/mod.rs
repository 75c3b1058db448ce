//! HTTP adapter for the external question and validation services.
//!
//! [`HttpGameApi`] implements both the
//! [`QuestionSource`](numline_application::QuestionSource) and
//! [`PlacementOracle`](numline_application::PlacementOracle) ports.

pub mod client;
pub mod error;
pub mod protocol;

pub use client::HttpGameApi;
pub use error::ApiError;
