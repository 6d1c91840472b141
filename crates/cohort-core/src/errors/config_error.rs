//! Configuration loading errors.

use super::error_code::{self, CohortErrorCode};

/// Errors while loading policy defaults configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid policy defaults config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("policy defaults config rejected: {0}")]
    OutOfRange(String),
}

impl CohortErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
