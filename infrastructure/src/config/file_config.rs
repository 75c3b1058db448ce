//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:8000/api"
//! timeout_seconds = 10
//!
//! [board]
//! mouse = true
//! tick_ms = 250
//!
//! [output]
//! color = true
//! format = "text"
//!
//! [log]
//! file = "~/.local/share/numline/numline.log"
//! round_log = "rounds.jsonl"
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default location of the question/validation services
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("api.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("api.base_url must be an http(s) URL, got {0:?}")]
    InvalidBaseUrl(String),

    #[error("board.tick_ms cannot be 0")]
    InvalidTick,
}

/// Raw API configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL prefix for `/questions/...` and `/game/...`
    pub base_url: String,
    /// Timeout in seconds for each request
    pub timeout_seconds: u64,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 10,
        }
    }
}

impl FileApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Raw board (TUI) configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBoardConfig {
    /// Enable mouse drag-and-drop
    pub mouse: bool,
    /// Redraw interval in milliseconds
    pub tick_ms: u64,
}

impl Default for FileBoardConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            tick_ms: 250,
        }
    }
}

/// Output format for one-shot commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    #[default]
    Text,
    Json,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    pub format: FileOutputFormat,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            format: FileOutputFormat::Text,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Diagnostic log file used while the board owns the terminal
    pub file: Option<String>,
    /// JSONL transcript of round events (disabled when unset)
    pub round_log: Option<String>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub api: FileApiConfig,
    pub board: FileBoardConfig,
    pub output: FileOutputConfig,
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.api.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        let base_url = self.api.base_url.trim();
        let valid_url = reqwest::Url::parse(base_url)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
            .unwrap_or(false);
        if !valid_url {
            return Err(ConfigValidationError::InvalidBaseUrl(
                self.api.base_url.clone(),
            ));
        }

        if self.board.tick_ms == 0 {
            return Err(ConfigValidationError::InvalidTick);
        }

        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
