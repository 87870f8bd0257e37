//! CLI error types

use gum_core::UncertaintyError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by the `gum` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Uncertainty(#[from] UncertaintyError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Self-check failed: {0}")]
    CheckFailed(String),
}

impl CliError {
    /// Validation failure to report as a structured JSON body, if any
    pub fn as_uncertainty(&self) -> Option<&UncertaintyError> {
        match self {
            CliError::Uncertainty(err) => Some(err),
            CliError::Config(ConfigError::Invalid(err)) => Some(err),
            _ => None,
        }
    }
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
