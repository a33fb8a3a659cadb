//! Tests for the sift configuration system.

use std::sync::Mutex;

use sift_core::config::{EngineConfig, RuntimeConfig};
use sift_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper: create a temporary home directory.
fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all SIFT_ env vars to prevent cross-test contamination.
fn clear_sift_env_vars() {
    for key in ["SIFT_MAX_ENGINES", "SIFT_MAX_INPUT_BYTES", "SIFT_ANCHORED"] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sift_env_vars();

    let home = tempdir();
    let config = RuntimeConfig::load(home.path()).unwrap();
    assert_eq!(config.limits.max_engines, 256);
    assert_eq!(config.limits.max_input_bytes, 0);
    assert!(config.engine.anchored);
}

#[test]
fn test_home_config_overrides_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sift_env_vars();

    let home = tempdir();
    std::fs::write(
        home.path().join("sift.toml"),
        r#"
[limits]
max_engines = 8
max_input_bytes = 1024

[engine]
anchored = false
"#,
    )
    .unwrap();

    let config = RuntimeConfig::load(home.path()).unwrap();
    assert_eq!(config.limits.max_engines, 8);
    assert_eq!(config.limits.max_input_bytes, 1024);
    assert!(!config.engine.anchored);
}

#[test]
fn test_env_overrides_home_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sift_env_vars();

    let home = tempdir();
    std::fs::write(home.path().join("sift.toml"), "[limits]\nmax_engines = 8\n").unwrap();
    std::env::set_var("SIFT_MAX_ENGINES", "2");

    let config = RuntimeConfig::load(home.path());
    clear_sift_env_vars();

    assert_eq!(config.unwrap().limits.max_engines, 2);
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sift_env_vars();

    let home = tempdir();
    std::fs::write(home.path().join("sift.toml"), "limits = not toml").unwrap();

    match RuntimeConfig::load(home.path()) {
        Err(ConfigError::ParseError { path, .. }) => assert!(path.contains("sift.toml")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_zero_max_engines_fails_validation() {
    match RuntimeConfig::from_toml("[limits]\nmax_engines = 0\n") {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "limits.max_engines");
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_engine_config_from_json() {
    let config = EngineConfig::from_json(br#"{"expression": "a+", "name": "letters"}"#).unwrap();
    assert_eq!(config.expression, "a+");
    assert_eq!(config.name.as_deref(), Some("letters"));
    assert_eq!(config.anchored, None);
}

#[test]
fn test_engine_config_rejects_malformed_json() {
    match EngineConfig::from_json(b"{\"expression\": ") {
        Err(ConfigError::MalformedEngineConfig { .. }) => {}
        other => panic!("expected malformed-config error, got {other:?}"),
    }
}

#[test]
fn test_engine_config_requires_expression() {
    assert!(EngineConfig::from_json(br#"{"name": "no-expression"}"#).is_err());
}
