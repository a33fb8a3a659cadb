//! Pattern engine errors.

use super::error_code::{self, SiftErrorCode};

/// Errors raised while compiling or executing an engine's pattern program.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Pattern compile failed: {message}")]
    CompileFailed { message: String },

    #[error("Match input of {len} bytes exceeds the configured limit of {max}")]
    InputTooLarge { len: u64, max: u64 },
}

impl SiftErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        error_code::ENGINE_ERROR
    }
}
