//! Error handling for sift.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod bridge_error;
pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod registry_error;
pub mod runtime_error;

pub use bridge_error::BridgeError;
pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::SiftErrorCode;
pub use registry_error::RegistryError;
pub use runtime_error::RuntimeError;
