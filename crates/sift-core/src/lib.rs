//! # sift-core
//!
//! The engine side of the sift bridge: pattern engines, the registry of live
//! engines, configuration, errors, and tracing setup. Everything here is
//! plain safe Rust; the C boundary lives in `sift-ffi`.

pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod registry;
pub mod tracing_setup;

pub use config::{EngineConfig, RuntimeConfig};
pub use engine::{Engine, MatchOutcome};
pub use errors::{BridgeError, ConfigError, EngineError, RegistryError};
pub use registry::EngineRegistry;
