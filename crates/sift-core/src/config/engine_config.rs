//! Per-engine configuration, supplied as JSON across the boundary.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Configuration for one engine instance.
///
/// The caller hands this over as a JSON buffer; the format is:
/// `{"expression": "...", "name": "...", "anchored": true}` where only
/// `expression` is required. An empty expression compiles to the trivial
/// always-succeed pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pattern expression, `regex` syntax, matched against raw bytes.
    pub expression: String,
    /// Optional human-readable engine name.
    #[serde(default)]
    pub name: Option<String>,
    /// Anchoring override; falls back to the runtime default when omitted.
    #[serde(default)]
    pub anchored: Option<bool>,
}

impl EngineConfig {
    /// Parse an engine config from raw JSON bytes.
    pub fn from_json(raw: &[u8]) -> Result<Self, ConfigError> {
        serde_json::from_slice(raw).map_err(|e| ConfigError::MalformedEngineConfig {
            message: e.to_string(),
        })
    }
}
