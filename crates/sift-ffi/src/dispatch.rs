//! The generic named-operation dispatcher.
//!
//! Operations form a closed, statically enumerated table: name, kind,
//! whether the operation is engine-scoped, and its argument arity. Lookup
//! and arity checks happen before anything is invoked, so an unknown name or
//! a malformed call has no side effects. Engine execution runs under
//! `catch_unwind` — a panic inside an engine is contained here and
//! re-encoded as an error result, never unwound across the boundary.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde_json::json;

use sift_core::config::EngineConfig;
use sift_core::engine::Engine;
use sift_core::errors::{error_code, BridgeError};

use crate::runtime::{self, SiftRuntime};

/// The operation kinds the dispatcher knows how to invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    NewEngine,
    InspectEngine,
    Match,
    DeleteEngine,
}

/// One row of the operation table.
pub struct OpSpec {
    pub name: &'static str,
    pub kind: OpKind,
    /// Whether the operation addresses a live engine by identifier.
    pub engine_scoped: bool,
    /// Exact number of buffer arguments after the engine identifier.
    pub arity: u32,
    /// Argument names, for arity diagnostics.
    pub arg_names: &'static [&'static str],
}

/// The closed set of supported operations.
pub const OPERATIONS: &[OpSpec] = &[
    OpSpec {
        name: "new_engine",
        kind: OpKind::NewEngine,
        engine_scoped: false,
        arity: 1,
        arg_names: &["config"],
    },
    OpSpec {
        name: "inspect_engine",
        kind: OpKind::InspectEngine,
        engine_scoped: true,
        arity: 0,
        arg_names: &[],
    },
    OpSpec {
        name: "match",
        kind: OpKind::Match,
        engine_scoped: true,
        arity: 1,
        arg_names: &["input"],
    },
    OpSpec {
        name: "delete_engine",
        kind: OpKind::DeleteEngine,
        engine_scoped: true,
        arity: 0,
        arg_names: &[],
    },
];

/// Resolve and invoke a named operation.
///
/// Returns the payload elements on success; the status slot is prepended by
/// the envelope encoder. The runtime lock is held for the full invocation,
/// so engine creation/destruction is linearizable with respect to every
/// dispatch call naming the same identifier.
pub fn dispatch(
    name: &str,
    engine_id: Option<&[u8]>,
    args: &[&[u8]],
) -> Result<Vec<Vec<u8>>, BridgeError> {
    let spec = OPERATIONS
        .iter()
        .find(|op| op.name == name)
        .ok_or_else(|| {
            BridgeError::new(
                error_code::UNKNOWN_OPERATION,
                format!("No operation named {name}"),
            )
        })?;

    if args.len() as u32 != spec.arity {
        let detail = if (args.len() as u32) < spec.arity {
            format!(
                "operation {name} is missing argument {} ({} expected, {} given)",
                spec.arg_names[args.len()],
                spec.arity,
                args.len()
            )
        } else {
            format!(
                "operation {name} takes {} argument(s), {} given",
                spec.arity,
                args.len()
            )
        };
        return Err(BridgeError::new(error_code::INVALID_ARGUMENT, detail));
    }

    let engine_id = match (spec.engine_scoped, engine_id) {
        (false, _) => None,
        (true, Some(raw)) => Some(std::str::from_utf8(raw).map_err(|_| {
            BridgeError::new(
                error_code::INVALID_ARGUMENT,
                "engine_id is not valid UTF-8".to_string(),
            )
        })?),
        (true, None) => {
            return Err(BridgeError::new(
                error_code::INVALID_ARGUMENT,
                format!("operation {name} requires an engine_id"),
            ))
        }
    };

    runtime::with_runtime(|rt| {
        match catch_unwind(AssertUnwindSafe(|| invoke(rt, spec, engine_id, args))) {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(operation = name, "engine panicked; contained at the boundary");
                Err(BridgeError::new(
                    error_code::INTERNAL_ERROR,
                    format!("operation {name} panicked inside the engine"),
                ))
            }
        }
    })
}

fn invoke(
    rt: &mut SiftRuntime,
    spec: &OpSpec,
    engine_id: Option<&str>,
    args: &[&[u8]],
) -> Result<Vec<Vec<u8>>, BridgeError> {
    match (spec.kind, engine_id) {
        (OpKind::NewEngine, _) => new_engine(rt, args[0]),
        (OpKind::InspectEngine, Some(id)) => inspect_engine(rt, id),
        (OpKind::Match, Some(id)) => run_match(rt, id, args[0]),
        (OpKind::DeleteEngine, Some(id)) => delete_engine(rt, id),
        _ => Err(BridgeError::new(
            error_code::INTERNAL_ERROR,
            "engine-scoped operation dispatched without an engine id".to_string(),
        )),
    }
}

/// Compile first, register second: a failure anywhere before `insert`
/// leaves the registry exactly as it was.
fn new_engine(rt: &mut SiftRuntime, raw_config: &[u8]) -> Result<Vec<Vec<u8>>, BridgeError> {
    let config = EngineConfig::from_json(raw_config)?;
    let engine = Engine::compile(config, &rt.config.engine)?;
    let id = rt.engines.insert(engine)?;
    let diagnostics = rt.engines.get(&id)?.describe(&id);
    Ok(vec![
        id.into_bytes(),
        diagnostics.to_string().into_bytes(),
    ])
}

fn inspect_engine(rt: &mut SiftRuntime, id: &str) -> Result<Vec<Vec<u8>>, BridgeError> {
    let engine = rt.engines.get(id)?;
    Ok(vec![engine.describe(id).to_string().into_bytes()])
}

fn run_match(rt: &mut SiftRuntime, id: &str, input: &[u8]) -> Result<Vec<Vec<u8>>, BridgeError> {
    let max_input_bytes = rt.config.limits.max_input_bytes;
    let engine = rt.engines.get(id)?;
    let outcome = engine.run(input, max_input_bytes)?;
    Ok(vec![
        if outcome.matched { b"true".to_vec() } else { b"false".to_vec() },
        outcome.data.to_string().into_bytes(),
        outcome.leftover.to_string().into_bytes(),
        json!({ "match_time_us": outcome.match_time_us })
            .to_string()
            .into_bytes(),
    ])
}

fn delete_engine(rt: &mut SiftRuntime, id: &str) -> Result<Vec<Vec<u8>>, BridgeError> {
    rt.engines.remove(id)?;
    Ok(Vec::new())
}
