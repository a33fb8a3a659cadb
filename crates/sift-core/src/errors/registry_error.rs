//! Engine registry errors.

use super::error_code::{self, SiftErrorCode};

/// Errors from the registry of live engines.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("No engine named {id}")]
    UnknownEngine { id: String },

    #[error("Engine limit reached: {max} engines are live")]
    CapacityExceeded { max: u32 },
}

impl SiftErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            RegistryError::UnknownEngine { .. } => error_code::UNKNOWN_ENGINE,
            RegistryError::CapacityExceeded { .. } => error_code::REGISTRY_FULL,
        }
    }
}
