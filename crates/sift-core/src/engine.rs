//! The pattern engine: one compiled, executable pattern program.
//!
//! Input is raw bytes (it may contain NUL or non-UTF-8 sequences), so the
//! program is compiled with the `regex` bytes engine. Match results carry
//! byte-offset spans only, never slices of the input, which keeps the JSON
//! payload well-formed for any input.

use std::time::Instant;

use regex::bytes::Regex;
use serde_json::{json, Value};

use crate::config::{EngineConfig, EngineDefaults};
use crate::errors::EngineError;

/// A live engine instance. Identifiers are assigned by the registry;
/// the engine itself only knows its compiled program and resolved config.
pub struct Engine {
    name: Option<String>,
    expression: String,
    anchored: bool,
    program: Regex,
}

/// The outcome of running an engine against one input.
pub struct MatchOutcome {
    pub matched: bool,
    /// Match structure: span and named-capture spans, `{}` when unmatched.
    pub data: Value,
    /// Input bytes remaining after the match end (whole input when unmatched).
    pub leftover: u32,
    /// Wall time spent inside the pattern program.
    pub match_time_us: u64,
}

impl Engine {
    /// Compile an engine from its config, resolving omitted fields against
    /// the runtime defaults. Compilation happens before the engine is ever
    /// registered, so a failure here leaves no trace in the registry.
    pub fn compile(config: EngineConfig, defaults: &EngineDefaults) -> Result<Self, EngineError> {
        let anchored = config.anchored.unwrap_or(defaults.anchored);
        let pattern = if anchored {
            format!(r"\A(?:{})", config.expression)
        } else {
            config.expression.clone()
        };
        let program = Regex::new(&pattern).map_err(|e| EngineError::CompileFailed {
            message: e.to_string(),
        })?;

        tracing::debug!(
            expression = %config.expression,
            anchored,
            "engine compiled"
        );

        Ok(Self {
            name: config.name,
            expression: config.expression,
            anchored,
            program,
        })
    }

    /// Run the pattern program against `input`.
    ///
    /// `max_input_bytes` is the runtime limit (0 = unlimited); an oversized
    /// input is an engine error, reported like any other.
    pub fn run(&self, input: &[u8], max_input_bytes: u64) -> Result<MatchOutcome, EngineError> {
        if max_input_bytes > 0 && input.len() as u64 > max_input_bytes {
            return Err(EngineError::InputTooLarge {
                len: input.len() as u64,
                max: max_input_bytes,
            });
        }

        let start = Instant::now();
        let captures = self.program.captures(input);
        let match_time_us = start.elapsed().as_micros() as u64;

        // Group 0 is the overall match; treat its absence as no match.
        let whole = captures.as_ref().and_then(|caps| caps.get(0));

        let outcome = match (&captures, whole) {
            (Some(caps), Some(whole)) => {
                let mut named = serde_json::Map::new();
                for name in self.program.capture_names().flatten() {
                    if let Some(m) = caps.name(name) {
                        named.insert(
                            name.to_string(),
                            json!({"begin": m.start(), "end": m.end()}),
                        );
                    }
                }

                MatchOutcome {
                    matched: true,
                    data: json!({
                        "begin": whole.start(),
                        "end": whole.end(),
                        "captures": Value::Object(named),
                    }),
                    leftover: (input.len() - whole.end()) as u32,
                    match_time_us,
                }
            }
            _ => MatchOutcome {
                matched: false,
                data: json!({}),
                leftover: input.len() as u32,
                match_time_us,
            },
        };

        tracing::debug!(
            matched = outcome.matched,
            leftover = outcome.leftover,
            match_time_us,
            "match complete"
        );

        Ok(outcome)
    }

    /// Describe the engine's resolved configuration as JSON.
    pub fn describe(&self, id: &str) -> Value {
        json!({
            "id": id,
            "name": self.name.as_deref(),
            "expression": self.expression.as_str(),
            "anchored": self.anchored,
        })
    }
}
