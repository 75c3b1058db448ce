//! Infrastructure layer for numline
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileApiConfig, FileBoardConfig, FileConfig,
    FileLogConfig, FileOutputConfig, FileOutputFormat,
};
pub use http::{ApiError, HttpGameApi};
pub use logging::JsonlRoundLogger;
