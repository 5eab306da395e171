//! Session configuration loaded from TOML.
//!
//! Every field is optional in the file:
//!
//! ```toml
//! theme = "theme2"
//! history_limit = 50
//!
//! [number_format]
//! group_separator = " "
//! decimal_separator = ","
//! ```

use crate::display::NumberFormat;
use crate::session::DEFAULT_HISTORY_LIMIT;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("history_limit must be at least 1")]
    ZeroHistoryLimit,

    #[error("Separators must be distinct non-digit characters (group {group:?}, decimal {decimal:?})")]
    InvalidSeparators { group: char, decimal: char },
}

/// Settings applied when a session is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub theme: Theme,
    pub number_format: NumberFormat,
    /// Maximum number of transition records kept
    pub history_limit: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            number_format: NumberFormat::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycalc::config::CalculatorConfig;
    /// use keycalc::theme::Theme;
    ///
    /// let config = CalculatorConfig::from_toml_str("theme = \"theme3\"").unwrap();
    /// assert_eq!(config.theme, Theme::Theme3);
    /// assert_eq!(config.history_limit, 100);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!(path = %path.display(), theme = %config.theme, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == 0 {
            return Err(ConfigError::ZeroHistoryLimit);
        }

        let NumberFormat {
            group_separator: group,
            decimal_separator: decimal,
        } = self.number_format;

        if group == decimal || group.is_ascii_digit() || decimal.is_ascii_digit() {
            return Err(ConfigError::InvalidSeparators { group, decimal });
        }
        Ok(())
    }
}
