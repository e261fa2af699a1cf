use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::form::TransientDelays;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Lifetime of the "digits not allowed" warning
    pub digit_warning_ms: u64,
    /// Lifetime of the leading-space warning
    pub space_warning_ms: u64,
    /// How long the success message stays before the form resets
    pub success_reset_ms: u64,
    /// Upper bound on the event poll interval
    pub tick_rate_ms: u64,
    pub mask_password: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            digit_warning_ms: 1000,
            space_warning_ms: 900,
            success_reset_ms: 1200,
            tick_rate_ms: 100,
            mask_password: true,
        }
    }
}

impl AppConfig {
    /// `smart-form/config.toml` under the platform config directory
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("smart-form").join("config.toml")
    }

    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("digit_warning_ms", self.digit_warning_ms),
            ("space_warning_ms", self.space_warning_ms),
            ("success_reset_ms", self.success_reset_ms),
            ("tick_rate_ms", self.tick_rate_ms),
        ];

        if let Some((name, _)) = durations.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::ValidationError {
                message: format!("{} must be greater than zero", name),
            });
        }
        Ok(())
    }

    pub fn delays(&self) -> TransientDelays {
        TransientDelays {
            digit_warning: Duration::from_millis(self.digit_warning_ms),
            space_warning: Duration::from_millis(self.space_warning_ms),
            success_reset: Duration::from_millis(self.success_reset_ms),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_form_timing() {
        let config = AppConfig::default();
        assert_eq!(config.delays(), TransientDelays::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "success_reset_ms = 3000\nmask_password = false").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.success_reset_ms, 3000);
        assert!(!config.mask_password);
        assert_eq!(config.digit_warning_ms, 1000);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "space_warning_ms = 0").unwrap();

        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
        assert!(err.to_string().contains("space_warning_ms"));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"dark\"").unwrap();

        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
