//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;
use yinyang_base::BaseError;

/// Errors from reading, parsing or validating a configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Unknown profile name or inconsistent ruleset.
    #[error("invalid config: {0}")]
    Invalid(#[from] BaseError),
    #[error("invalid logging.level '{0}'")]
    LogLevel(String),
}
