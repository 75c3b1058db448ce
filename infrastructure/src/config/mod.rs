//! Configuration file loading for numline
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `NUMLINE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./numline.toml` or `./.numline.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/numline/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, FileApiConfig, FileBoardConfig, FileConfig,
    FileLogConfig, FileOutputConfig, FileOutputFormat,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
