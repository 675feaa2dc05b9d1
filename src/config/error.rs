//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] ::toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Unknown cache strategy name.
    #[error(
        "Invalid cache strategy '{value}': expected 'fixed', 'adaptive', 'network-event', or 'hybrid'"
    )]
    InvalidStrategy {
        /// The rejected value
        value: String,
    },

    /// A refresh or poll interval outside the accepted range.
    #[error("Invalid {field}: {reason}")]
    InvalidInterval {
        /// Name of the offending field
        field: &'static str,
        /// Reason for rejection
        reason: String,
    },

    /// The lookup host is empty or not a valid host name.
    #[error("Invalid lookup host '{host}'")]
    InvalidHost {
        /// The rejected host value
        host: String,
    },
}
