//! Configuration file support.
//!
//! An optional JSON file controls log verbosity and the encoder and decoder
//! settings. Every field has a default, so a partial file (or `{}`) is valid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::format::{ExportOptions, ImportOptions};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    #[default]
    Warn,
    /// Show errors, warnings, and info messages
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get all log levels in order from least to most verbose.
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
    }

    /// The level `steps` positions more verbose, saturating at `Trace`.
    pub fn raised(&self, steps: u8) -> LogLevel {
        let levels = Self::all();
        let current = levels.iter().position(|l| l == self).unwrap_or(0);
        let idx = (current + steps as usize).min(levels.len() - 1);
        levels[idx]
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Encoder settings
    #[serde(default)]
    pub export: ExportSettings,

    /// Decoder settings
    #[serde(default)]
    pub import: ImportSettings,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Encoder section of the config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Spaces per XML nesting level
    #[serde(default = "default_xml_indent")]
    pub xml_indent: usize,

    /// Write an XML declaration line
    #[serde(default = "default_true")]
    pub xml_declaration: bool,

    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub json_pretty: bool,
}

fn default_xml_indent() -> usize {
    4
}

fn default_true() -> bool {
    true
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            xml_indent: default_xml_indent(),
            xml_declaration: true,
            json_pretty: true,
        }
    }
}

/// Decoder section of the config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportSettings {
    /// Strip surrounding whitespace from figure names
    #[serde(default)]
    pub trim_names: bool,
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            export: ExportSettings::default(),
            import: ImportSettings::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        if config.version < CONFIG_VERSION {
            log::warn!(
                "Configuration version {} is older than current version {}; \
                 missing settings use defaults",
                config.version,
                CONFIG_VERSION
            );
        }

        Ok(config)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Encoder options described by this configuration.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::new()
            .xml_indent(self.export.xml_indent)
            .xml_declaration(self.export.xml_declaration)
            .json_pretty(self.export.json_pretty)
    }

    /// Decoder options described by this configuration.
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions::new().trim_names(self.import.trim_names)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        /// Version found in the file
        file_version: u32,
        /// Highest version this build understands
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
