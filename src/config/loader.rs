use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::FormSettings;

/// Errors that can occur when loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid input pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl FormSettings {
    /// Returns the path to the settings file.
    ///
    /// Uses `~/.config/formstate/config.toml` on Unix/macOS, or the
    /// equivalent elsewhere via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("formstate").join("config.toml")
    }

    /// Loads settings from the default path.
    ///
    /// A missing file yields `FormSettings::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(FormSettings::default());
        }

        Self::load_from(&path)
    }

    /// Loads settings from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let settings = Self::from_toml_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(
            path = %path.display(),
            fields = settings.initial.len(),
            "Loaded form settings"
        );
        Ok(settings)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ActivationPolicy;
    use crate::value::FieldValue;

    #[test]
    fn empty_document_gives_defaults() {
        let settings = FormSettings::from_toml_str("").unwrap();
        assert_eq!(settings, FormSettings::default());
        assert_eq!(settings.activation, ActivationPolicy::FirstUpdate);
    }

    #[test]
    fn parses_flags_and_initial_values() {
        let settings = FormSettings::from_toml_str(
            r#"
native_input_validation = true
activation = "first_read"

[initial]
name = "Ada"
age = 36
isRealPerson = false
"#,
        )
        .unwrap();

        assert!(settings.native_input_validation);
        assert!(!settings.validate_from_start);
        assert_eq!(settings.activation, ActivationPolicy::FirstRead);
        assert_eq!(settings.initial["name"], FieldValue::from("Ada"));
        assert_eq!(settings.initial["age"], FieldValue::from(36));
        assert_eq!(settings.initial["isRealPerson"], FieldValue::from(false));
    }

    #[test]
    fn unknown_activation_is_rejected() {
        assert!(FormSettings::from_toml_str(r#"activation = "never""#).is_err());
    }

    #[test]
    fn config_path_ends_with_expected() {
        assert!(FormSettings::config_path().ends_with("formstate/config.toml"));
    }
}
