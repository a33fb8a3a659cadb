//! Runtime lifecycle errors.

use super::error_code::{self, SiftErrorCode};

/// Errors from the process-wide runtime lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("Runtime not initialized. Call sift_initialize() first")]
    NotInitialized,

    #[error("Runtime already initialized")]
    AlreadyInitialized,

    #[error("Runtime has been finalized; re-initialization is not supported")]
    Finalized,

    #[error("Home path is not a usable sift home: {message}")]
    BadHome { message: String },
}

impl SiftErrorCode for RuntimeError {
    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::NotInitialized => error_code::RUNTIME_NOT_INITIALIZED,
            RuntimeError::AlreadyInitialized => error_code::ALREADY_INITIALIZED,
            RuntimeError::Finalized => error_code::RUNTIME_FINALIZED,
            RuntimeError::BadHome { .. } => error_code::INIT_ERROR,
        }
    }
}
