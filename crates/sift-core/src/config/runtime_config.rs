//! Runtime configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ANCHORED, DEFAULT_MAX_ENGINES, DEFAULT_MAX_INPUT_BYTES, HOME_CONFIG_FILE,
};
use crate::errors::ConfigError;

/// Caps on runtime resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum number of simultaneously live engines.
    pub max_engines: u32,
    /// Maximum match input size in bytes (0 = unlimited).
    pub max_input_bytes: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_engines: DEFAULT_MAX_ENGINES,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

/// Defaults applied to engine configs that omit the corresponding field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineDefaults {
    /// Whether patterns match only at the start of the input.
    pub anchored: bool,
}

impl Default for EngineDefaults {
    fn default() -> Self {
        Self {
            anchored: DEFAULT_ANCHORED,
        }
    }
}

/// Top-level runtime configuration.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SIFT_*`)
/// 2. Home config (`sift.toml` in the home directory)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuntimeConfig {
    pub limits: LimitsConfig,
    pub engine: EngineDefaults,
}

impl RuntimeConfig {
    /// Load configuration with layered resolution against a home directory.
    pub fn load(home: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let home_config_path = home.join(HOME_CONFIG_FILE);
        if home_config_path.exists() {
            let raw = std::fs::read_to_string(&home_config_path).map_err(|e| {
                ConfigError::ParseError {
                    path: home_config_path.display().to_string(),
                    message: e.to_string(),
                }
            })?;
            config = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: home_config_path.display().to_string(),
                message: e.to_string(),
            })?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Parse configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn apply_env_overrides(config: &mut Self) {
        if let Some(v) = env_parse::<u32>("SIFT_MAX_ENGINES") {
            config.limits.max_engines = v;
        }
        if let Some(v) = env_parse::<u64>("SIFT_MAX_INPUT_BYTES") {
            config.limits.max_input_bytes = v;
        }
        if let Some(v) = env_parse::<bool>("SIFT_ANCHORED") {
            config.engine.anchored = v;
        }
    }

    fn validate(config: &Self) -> Result<(), ConfigError> {
        if config.limits.max_engines == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "limits.max_engines".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Parse an environment variable, ignoring unset or unparseable values.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.parse().ok()
}
