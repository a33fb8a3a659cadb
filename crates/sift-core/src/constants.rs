//! Shared constants for the sift bridge.

/// sift version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default cap on live engines per runtime.
pub const DEFAULT_MAX_ENGINES: u32 = 256;

/// Default cap on match input size in bytes (0 = unlimited).
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 0;

/// Default anchoring for engines whose config omits `anchored`.
pub const DEFAULT_ANCHORED: bool = true;

/// Name of the optional runtime config file inside the home directory.
pub const HOME_CONFIG_FILE: &str = "sift.toml";
