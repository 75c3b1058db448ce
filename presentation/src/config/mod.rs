//! Presentation-level configuration
//!
//! Settings for the board, the plain prompt and console output.

use std::path::PathBuf;
use std::time::Duration;

/// Board (TUI) configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Capture the mouse for drag-and-drop
    pub mouse: bool,
    /// Redraw interval
    pub tick: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            tick: Duration::from_millis(250),
        }
    }
}

/// Plain prompt configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Show a spinner while waiting on the services
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}
