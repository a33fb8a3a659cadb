//! Configuration errors.

use super::error_code::{self, SiftErrorCode};

/// Errors that can occur while loading or validating configuration —
/// both the runtime config in the home directory and per-engine JSON configs.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Engine config is not valid JSON: {message}")]
    MalformedEngineConfig { message: String },
}

impl SiftErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
