//! Tests for the pattern engine.

use sift_core::config::{EngineConfig, EngineDefaults};
use sift_core::engine::Engine;
use sift_core::errors::EngineError;

fn compile(expression: &str, anchored: Option<bool>) -> Engine {
    let config = EngineConfig {
        expression: expression.to_string(),
        name: None,
        anchored,
    };
    Engine::compile(config, &EngineDefaults::default()).unwrap()
}

#[test]
fn test_compile_failure_reports_engine_error() {
    let config = EngineConfig {
        expression: "(unclosed".to_string(),
        name: None,
        anchored: None,
    };
    match Engine::compile(config, &EngineDefaults::default()) {
        Err(EngineError::CompileFailed { .. }) => {}
        other => panic!("expected compile failure, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_anchored_match_consumes_prefix() {
    let engine = compile("ab+", None);
    let outcome = engine.run(b"abbbc", 0).unwrap();
    assert!(outcome.matched);
    assert_eq!(outcome.leftover, 1);
    assert_eq!(outcome.data["begin"], 0);
    assert_eq!(outcome.data["end"], 4);
}

#[test]
fn test_anchored_match_rejects_interior_match() {
    let engine = compile("b+", None);
    let outcome = engine.run(b"aabb", 0).unwrap();
    assert!(!outcome.matched);
    assert_eq!(outcome.leftover, 4);
}

#[test]
fn test_unanchored_match_finds_interior_match() {
    let engine = compile("b+", Some(false));
    let outcome = engine.run(b"aabbcc", 0).unwrap();
    assert!(outcome.matched);
    assert_eq!(outcome.data["begin"], 2);
    assert_eq!(outcome.data["end"], 4);
    assert_eq!(outcome.leftover, 2);
}

/// The empty expression is the trivial always-succeed pattern: it matches
/// zero bytes at the start of any input, leaving the whole input over.
#[test]
fn test_empty_expression_always_succeeds() {
    let engine = compile("", None);
    for input in [&b""[..], b"x", b"\x00\xffarbitrary\x00bytes"] {
        let outcome = engine.run(input, 0).unwrap();
        assert!(outcome.matched);
        assert_eq!(outcome.leftover as usize, input.len());
    }
}

#[test]
fn test_leftover_stays_within_input_length() {
    let engine = compile("a*", None);
    for input in [&b""[..], b"aaa", b"bbb", b"aab"] {
        let outcome = engine.run(input, 0).unwrap();
        assert!((outcome.leftover as usize) <= input.len());
    }
}

#[test]
fn test_named_captures_report_spans() {
    let engine = compile(r"(?P<key>[a-z]+)=(?P<value>[0-9]+)", None);
    let outcome = engine.run(b"port=8080 rest", 0).unwrap();
    assert!(outcome.matched);
    assert_eq!(outcome.data["captures"]["key"]["begin"], 0);
    assert_eq!(outcome.data["captures"]["key"]["end"], 4);
    assert_eq!(outcome.data["captures"]["value"]["begin"], 5);
    assert_eq!(outcome.data["captures"]["value"]["end"], 9);
    assert_eq!(outcome.leftover, 5);
}

#[test]
fn test_non_utf8_input_matches_safely() {
    // (?-u) so \xff is the raw byte, not U+00FF.
    let engine = compile(r"(?-u)\x00\xff", None);
    let outcome = engine.run(b"\x00\xfftrailer", 0).unwrap();
    assert!(outcome.matched);
    assert_eq!(outcome.leftover, 7);
    // The match payload must stay valid JSON even for binary input.
    assert!(serde_json::to_string(&outcome.data).is_ok());
}

#[test]
fn test_input_over_limit_is_an_engine_error() {
    let engine = compile("a", None);
    match engine.run(b"aaaa", 2) {
        Err(EngineError::InputTooLarge { len, max }) => {
            assert_eq!(len, 4);
            assert_eq!(max, 2);
        }
        other => panic!("expected input-too-large, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_describe_reports_resolved_config() {
    let config = EngineConfig {
        expression: "a+".to_string(),
        name: Some("letters".to_string()),
        anchored: None,
    };
    let engine = Engine::compile(config, &EngineDefaults::default()).unwrap();
    let description = engine.describe("engine-1");
    assert_eq!(description["id"], "engine-1");
    assert_eq!(description["name"], "letters");
    assert_eq!(description["expression"], "a+");
    assert_eq!(description["anchored"], true);
}
