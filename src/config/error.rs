// ABOUTME: Error types for loading notification configuration
// Covers filesystem access, TOML parsing and platform directory lookup

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a [`NotifyConfig`](super::NotifyConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this config shape.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The platform has no per-user config directory.
    #[error("No config directory available on this platform")]
    NoConfigDir,
}
