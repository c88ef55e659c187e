//! config
//!
//! Optional CLI configuration file.
//!
//! # Location
//!
//! `.gitform.toml` in the working directory (or the directory named by
//! `--cwd`). A missing file is not an error; it just means defaults.
//!
//! # Validation
//!
//! Config values are validated after parsing. Unknown fields are rejected
//! at parse time so typos surface instead of being silently ignored.
//!
//! # Example
//!
//! ```toml
//! [defaults]
//! directory = "../other-repo"
//! json = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The config file name searched for in the working directory.
pub const CONFIG_FILE: &str = ".gitform.toml";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Contents of `.gitform.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Defaults applied when the matching CLI flag is absent.
    pub defaults: Option<Defaults>,
}

/// The `[defaults]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    /// Default repository directory.
    pub directory: Option<String>,

    /// Default output format.
    pub json: Option<bool>,
}

impl FileConfig {
    /// Load configuration from `dir`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read,
    /// parsed, or validated.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let display = path.display().to_string();
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: display.clone(),
            message: e.to_string(),
        })?;

        let config: FileConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: display,
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(defaults) = &self.defaults {
            if defaults.directory.as_deref() == Some("") {
                return Err(ConfigError::InvalidValue(
                    "defaults.directory cannot be empty".into(),
                ));
            }
        }
        Ok(())
    }

    /// The configured default directory, if any.
    pub fn directory(&self) -> Option<&str> {
        self.defaults.as_ref()?.directory.as_deref()
    }

    /// The configured default output format.
    pub fn json(&self) -> bool {
        self.defaults
            .as_ref()
            .and_then(|defaults| defaults.json)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults_table() {
        let config: FileConfig =
            toml::from_str("[defaults]\ndirectory = \"repo\"\njson = true\n").unwrap();
        assert_eq!(config.directory(), Some("repo"));
        assert!(config.json());
    }

    #[test]
    fn empty_file_means_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert_eq!(config.directory(), None);
        assert!(!config.json());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<FileConfig>("[defaults]\ndirectroy = \"typo\"\n").is_err());
        assert!(toml::from_str::<FileConfig>("unknown_top_level = 1\n").is_err());
    }

    #[test]
    fn empty_directory_fails_validation() {
        let config: FileConfig = toml::from_str("[defaults]\ndirectory = \"\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn load_missing_file_yields_defaults() {
        let dir = std::env::temp_dir();
        // No .gitform.toml in a fresh temp subdirectory
        let sub = dir.join("gitform-config-test-missing");
        let _ = std::fs::create_dir_all(&sub);
        let config = FileConfig::load(&sub).unwrap();
        assert_eq!(config, FileConfig::default());
    }
}
