//! Configuration loading for `topwords.toml`.
//!
//! Every field is optional in the file; missing values fall back to the
//! defaults below, and command-line flags override both.

use crate::document::{default_replacements, Replacement, DEFAULT_MARKER};
use crate::types::SelectionMethod;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "topwords.toml";

/// Page analysed when no URL or file is given.
pub const DEFAULT_URL: &str = "http://az.lib.ru/t/tolstoj_lew_nikolaewich/text_0040.shtml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
  /// File I/O error
  #[error("Failed to read config: {0}")]
  Io(#[from] std::io::Error),
  /// TOML parsing error
  #[error("Failed to parse topwords.toml: {0}")]
  Parse(#[from] toml::de::Error),
  /// Validation error
  #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
  Validation(Vec<String>),
}

/// Settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Page to download.
  pub url: String,
  /// Marker that opens the document body. `None` or an empty marker
  /// analyses the whole page.
  pub marker: Option<String>,
  /// How many words to report.
  pub top: usize,
  /// Which selector ranks the words.
  pub method: SelectionMethod,
  /// Count the empty tokens produced at the edges of the text.
  pub keep_empty: bool,
  /// Literal substitutions applied to the body before tokenizing.
  pub replacements: Vec<Replacement>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      url: DEFAULT_URL.to_string(),
      marker: Some(DEFAULT_MARKER.to_string()),
      top: 10,
      method: SelectionMethod::default(),
      keep_empty: false,
      replacements: default_replacements(),
    }
  }
}

impl Config {
  /// The marker to search for, if body extraction is enabled.
  pub fn body_marker(&self) -> Option<&str> {
    self.marker.as_deref().filter(|marker| !marker.is_empty())
  }

  /// Checks values that parse fine but make no sense.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let mut errors = Vec::new();
    if self.top == 0 {
      errors.push("top must be at least 1".to_string());
    }
    if self.url.trim().is_empty() {
      errors.push("url must not be empty".to_string());
    }

    if errors.is_empty() {
      Ok(())
    } else {
      Err(ConfigError::Validation(errors))
    }
  }
}

/// Parses and validates configuration from TOML text.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
  let config: Config = toml::from_str(content)?;
  config.validate()?;
  Ok(config)
}

/// Loads and validates a configuration file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
  let content = fs::read_to_string(path)?;
  parse_config(&content)
}

/// Looks for `topwords.toml` in `dir`.
pub fn find_config_in(dir: &Path) -> Option<PathBuf> {
  let candidate = dir.join(CONFIG_FILE);
  candidate.is_file().then_some(candidate)
}
