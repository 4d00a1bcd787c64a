//! Screen configuration loaded from TOML.
//!
//! A record screen reads three settings: the identifier stamped on each
//! rendered row, the label prefix, and how many records to bind. Every key
//! is optional; missing keys fall back to [`ScreenConfig::default`].
//!
//! ```
//! use lattice_rows::config::ScreenConfig;
//!
//! let config = ScreenConfig::from_toml_str(r#"
//! label_prefix = "Record #"
//! record_count = 3
//! "#).unwrap();
//!
//! assert_eq!(config.label_prefix, "Record #");
//! assert_eq!(config.record_count, 3);
//! assert_eq!(config.row_identifier, "UITableViewCell");
//! ```

use std::path::{Path, PathBuf};

use lattice_rows_core::logging::targets;
use serde::{Deserialize, Serialize};

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading a screen configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read screen config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("Invalid screen config: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("Failed to serialize screen config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Settings for a record list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenConfig {
    /// Identifier stamped on every rendered row, used by hosts that pool rows.
    pub row_identifier: String,
    /// Text placed before each record's id in the row label.
    pub label_prefix: String,
    /// Number of records bound on load, with ids `1..=record_count`.
    pub record_count: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            row_identifier: "UITableViewCell".to_string(),
            label_prefix: "CustomModel: ".to_string(),
            record_count: 10,
        }
    }
}

impl ScreenConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::io(path, source))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?config, "screen config loaded");
        Ok(config)
    }

    /// Serializes the configuration to TOML text.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Renders the label for a record id.
    pub fn label_for(&self, id: u32) -> String {
        format!("{}{}", self.label_prefix, id)
    }
}

static_assertions::assert_impl_all!(ScreenConfig: Send, Sync);
