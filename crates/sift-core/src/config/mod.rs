//! Configuration for the sift runtime and for individual engines.
//!
//! Two distinct surfaces: `RuntimeConfig` is TOML, loaded once from the home
//! directory at initialize time; `EngineConfig` is JSON, supplied per engine
//! by the caller across the boundary.

pub mod engine_config;
pub mod runtime_config;

pub use engine_config::EngineConfig;
pub use runtime_config::{EngineDefaults, LimitsConfig, RuntimeConfig};
