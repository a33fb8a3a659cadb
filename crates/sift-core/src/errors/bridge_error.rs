//! Boundary error conversion.
//! Converts all sift error types to the structured status-slot form.

use super::error_code::SiftErrorCode;
use super::{ConfigError, EngineError, RegistryError, RuntimeError};

/// Boundary-specific error wrapper that renders any sift error
/// as a structured `[ERROR_CODE] message` string — the exact bytes
/// that land in the status slot of a returned buffer array.
#[derive(Debug, thiserror::Error)]
#[error("[{code}] {message}")]
pub struct BridgeError {
    pub code: &'static str,
    pub message: String,
}

impl BridgeError {
    pub fn new(code: &'static str, message: String) -> Self {
        Self { code, message }
    }
}

impl SiftErrorCode for BridgeError {
    fn error_code(&self) -> &'static str {
        self.code
    }
}

impl From<ConfigError> for BridgeError {
    fn from(e: ConfigError) -> Self {
        Self::new(e.error_code(), e.to_string())
    }
}

impl From<EngineError> for BridgeError {
    fn from(e: EngineError) -> Self {
        Self::new(e.error_code(), e.to_string())
    }
}

impl From<RegistryError> for BridgeError {
    fn from(e: RegistryError) -> Self {
        Self::new(e.error_code(), e.to_string())
    }
}

impl From<RuntimeError> for BridgeError {
    fn from(e: RuntimeError) -> Self {
        Self::new(e.error_code(), e.to_string())
    }
}
