//! Console presentation settings.
//!
//! Only affects how the console session looks. Code length and the round
//! limit are fixed by the game and cannot be configured here.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Print the rules before the setter is asked for a code.
    #[serde(default = "default_show_rules")]
    show_rules: bool,

    /// Width of the `-----` separator line.
    #[serde(default = "default_separator_width")]
    separator_width: usize,

    /// Lines of `|` printed to scroll the secret off screen.
    #[serde(default = "default_page_break_lines")]
    page_break_lines: usize,
}

fn default_show_rules() -> bool {
    true
}

fn default_separator_width() -> usize {
    50
}

fn default_page_break_lines() -> usize {
    25
}

impl ConsoleConfig {
    /// Creates a configuration with explicit values.
    pub fn new(show_rules: bool, separator_width: usize, page_break_lines: usize) -> Self {
        Self {
            show_rules,
            separator_width,
            page_break_lines,
        }
    }

    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new(
            default_show_rules(),
            default_separator_width(),
            default_page_break_lines(),
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
