//! User settings, read from `~/.tparse/config.yaml`.
//!
//! Every section and key is optional:
//!
//! ```yaml
//! general:
//!   default_output: json
//!   color: never
//! parser:
//!   extract_when: true
//! export:
//!   reveal: true
//! ```

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::TparseError;
use crate::features::nlp::ParserOptions;
use crate::things::THINGS_JSON_URL;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Parser settings.
    pub parser: ParserConfig,
    /// Export settings.
    pub export: ExportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply the setting to the `colored` crate.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Parser settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Pull a `when` date out of each title.
    pub extract_when: bool,
    /// Push a past `when` one week forward.
    #[serde(default = "default_true")]
    pub roll_past_dates: bool,
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Ask Things to show imported items.
    pub reveal: bool,
    /// Callback URL the payload is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    THINGS_JSON_URL.to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            extract_when: false,
            roll_past_dates: default_true(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            reveal: false,
            base_url: default_base_url(),
        }
    }
}

impl ParserConfig {
    /// Parser options from these settings.
    #[must_use]
    pub const fn options(&self) -> ParserOptions {
        ParserOptions {
            extract_when: self.extract_when,
            roll_past_dates: self.roll_past_dates,
        }
    }
}

const CONFIG_DIR: &str = ".tparse";
const CONFIG_FILE: &str = "config.yaml";

impl Config {
    /// `~/.tparse/config.yaml`
    ///
    /// # Errors
    ///
    /// Returns `TparseError::Config` if `HOME` is not set.
    pub fn default_path() -> Result<PathBuf, TparseError> {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(CONFIG_DIR).join(CONFIG_FILE))
            .ok_or_else(|| TparseError::Config("HOME is not set".to_string()))
    }

    /// Load from [`Config::default_path`].
    ///
    /// # Errors
    ///
    /// Returns an error if `HOME` is unset or the file cannot be parsed.
    pub fn load() -> Result<Self, TparseError> {
        Self::load_from_path(&Self::default_path()?)
    }

    /// Load from `path`; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `TparseError::Config` if the file exists but cannot be read
    /// or parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, TparseError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(config_error("read", path, &e)),
        };

        serde_yaml::from_str(&contents).map_err(|e| config_error("parse", path, &e))
    }

    /// Save to `path`, creating its directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `TparseError::Config` if the file cannot be written.
    pub fn save_to_path(&self, path: &Path) -> Result<(), TparseError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| config_error("create the directory of", path, &e))?;
        }
        let contents = serde_yaml::to_string(self).map_err(|e| config_error("serialize", path, &e))?;
        std::fs::write(path, contents).map_err(|e| config_error("write", path, &e))
    }
}

fn config_error(action: &str, path: &Path, err: &dyn fmt::Display) -> TparseError {
    TparseError::Config(format!("could not {action} {}: {err}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert!(!config.parser.extract_when);
        assert!(config.parser.roll_past_dates);
        assert!(!config.export.reveal);
        assert_eq!(config.export.base_url, "things:///json?");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.parser.extract_when = true;
        config.export.reveal = true;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert!(loaded.parser.extract_when);
        assert!(loaded.export.reveal);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r#"
parser:
  roll_past_dates: false
"#;
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert!(!config.parser.roll_past_dates);
        // Defaults should be used for missing fields
        assert!(!config.parser.extract_when);
        assert_eq!(config.export.base_url, "things:///json?");
    }

    #[test]
    fn test_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "general: [not, a, map]").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, TparseError::Config(_)));
    }

    #[test]
    fn test_save_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".tparse").join("config.yaml");

        Config::default().save_to_path(&config_path).unwrap();
        assert!(config_path.exists());
    }

    #[test]
    fn test_parser_options() {
        let config = ParserConfig {
            extract_when: true,
            roll_past_dates: false,
        };
        let options = config.options();
        assert!(options.extract_when);
        assert!(!options.roll_past_dates);
    }
}
