//! Configuration loading for the view layer.
//!
//! The canonical configuration lives in `assembly-config.yaml`. Every field
//! has a serde default, so an empty file (or no file at all) yields the same
//! settings the motion detail page has always used.

use std::path::Path;

use serde::Deserialize;

use crate::display::{ChangeRecoMode, DEFAULT_LINE_LENGTH, DisplaySettings, LineNumberingMode};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level view configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ViewConfig {
    /// Defaults for motion detail pages.
    #[serde(default)]
    pub motions: MotionDisplayConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ViewConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// Initial display state for every new motion projection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MotionDisplayConfig {
    /// Line numbering mode.
    #[serde(default)]
    pub line_numbering: LineNumberingMode,

    /// Change recommendation mode.
    #[serde(default)]
    pub change_reco: ChangeRecoMode,

    /// Maximum line length.
    #[serde(default = "default_line_length")]
    pub line_length: u32,
}

impl Default for MotionDisplayConfig {
    fn default() -> Self {
        Self {
            line_numbering: LineNumberingMode::default(),
            change_reco: ChangeRecoMode::default(),
            line_length: default_line_length(),
        }
    }
}

impl MotionDisplayConfig {
    /// Build the display settings a fresh projection starts with.
    pub const fn display_settings(&self) -> DisplaySettings {
        DisplaySettings {
            line_numbering: self.line_numbering,
            change_reco: self.change_reco,
            line_length: self.line_length,
            highlighted_line: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_line_length() -> u32 {
    DEFAULT_LINE_LENGTH
}

fn default_log_level() -> String {
    "info".to_owned()
}
