//! Presentation layer for numline
//!
//! This crate contains CLI definitions, the terminal board, the plain
//! prompt, and console output formatting.

pub mod board;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use board::BoardApp;
pub use cli::commands::{Cli, Command, OutputFormat, QuestionCommand};
pub use config::{BoardConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use repl::plain::PlainRepl;
