// ABOUTME: Configuration for default notification durations
// Loaded from a TOML file in the platform config directory, falling back to built-in defaults

/// Config loading errors.
pub mod error;

pub use error::ConfigError;

use crate::models::Severity;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

const CONFIG_FILE: &str = "config.toml";

/// Default display durations, in milliseconds, per severity.
///
/// ```toml
/// [durations]
/// default = 3000
/// success = 3000
/// error = 5000
/// warning = 4000
/// info = 3000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationDefaults {
    /// Used by `show`, which takes a severity but no duration.
    #[serde(rename = "default")]
    pub fallback: u64,
    /// Used by the `success` wrapper.
    pub success: u64,
    /// Used by the `error` wrapper.
    pub error: u64,
    /// Used by the `warning` wrapper.
    pub warning: u64,
    /// Used by the `info` wrapper.
    pub info: u64,
}

impl Default for DurationDefaults {
    fn default() -> Self {
        Self {
            fallback: 3000,
            success: 3000,
            error: 5000,
            warning: 4000,
            info: 3000,
        }
    }
}

/// Notification settings, read from the `config.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// The `[durations]` table.
    pub durations: DurationDefaults,
}

impl NotifyConfig {
    /// Duration for notifications posted without one, whatever their severity.
    pub const fn default_duration(&self) -> Duration {
        Duration::from_millis(self.durations.fallback)
    }

    /// Default duration of the severity-specific wrappers.
    pub const fn duration_for(&self, severity: Severity) -> Duration {
        let ms = match severity {
            Severity::Success => self.durations.success,
            Severity::Error => self.durations.error,
            Severity::Warning => self.durations.warning,
            Severity::Info => self.durations.info,
        };
        Duration::from_millis(ms)
    }

    /// Parses config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        info!("Loaded notification config from {}", path.display());
        Ok(config)
    }

    /// Location of `config.toml` in the platform config directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("com", "pesitwizard", "transfer-toasts")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Reads the default config file if one exists. Missing or broken files
    /// never stop the application; the built-in defaults are used instead.
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                debug!("Using default notification config: {}", e);
                return Self::default();
            }
        };

        Self::load_or_fallback(&path)
    }

    /// Reads `path` if it exists; a missing or broken file yields the defaults.
    pub fn load_or_fallback(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        Self::load(path).unwrap_or_else(|e| {
            warn!("Ignoring notification config: {}", e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_severity_defaults() {
        let config = NotifyConfig::default();
        for severity in Severity::ALL {
            assert_eq!(config.duration_for(severity), severity.default_duration());
        }
    }

    #[test]
    fn test_partial_table_keeps_other_defaults() {
        let config = NotifyConfig::from_toml_str("[durations]\nerror = 0\n").unwrap();
        assert_eq!(config.duration_for(Severity::Error), Duration::ZERO);
        assert_eq!(config.duration_for(Severity::Warning), Duration::from_millis(4000));
    }

    #[test]
    fn test_generic_default_is_separate_from_severities() {
        let config = NotifyConfig::from_toml_str("[durations]\ndefault = 1200\n").unwrap();
        assert_eq!(config.default_duration(), Duration::from_millis(1200));
        assert_eq!(config.duration_for(Severity::Error), Duration::from_millis(5000));
        assert_eq!(NotifyConfig::default().default_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(NotifyConfig::from_toml_str("").unwrap(), NotifyConfig::default());
    }

    #[test]
    fn test_negative_duration_is_rejected() {
        let result = NotifyConfig::from_toml_str("[durations]\ninfo = -1\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
