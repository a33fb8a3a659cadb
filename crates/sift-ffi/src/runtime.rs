//! SiftRuntime — the process-wide lifecycle singleton.
//!
//! The runtime owns the engine registry and the resolved runtime
//! configuration. Its lifecycle is a strict three-state machine
//! (uninitialized → initialized → finalized), and every transition or access
//! holds the one state lock, so calls from any number of native threads are
//! serialized against the shared state. Re-initialization after finalize is
//! not supported; it reports a usage error.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde_json::{json, Value};

use sift_core::config::RuntimeConfig;
use sift_core::constants::VERSION;
use sift_core::errors::{error_code, BridgeError, RuntimeError};
use sift_core::registry::EngineRegistry;
use sift_core::tracing_setup::init_tracing;

/// The central runtime owning all engine state.
pub struct SiftRuntime {
    pub home: PathBuf,
    pub config: RuntimeConfig,
    pub engines: EngineRegistry,
}

enum LifecycleState {
    Uninitialized,
    Initialized(SiftRuntime),
    Finalized,
}

/// Global singleton. One runtime per process lifetime.
static STATE: Mutex<LifecycleState> = Mutex::new(LifecycleState::Uninitialized);

fn lock_state() -> Result<MutexGuard<'static, LifecycleState>, BridgeError> {
    STATE.lock().map_err(|_| {
        BridgeError::new(
            error_code::LOCK_POISONED,
            "runtime lock poisoned by an earlier panic".to_string(),
        )
    })
}

/// Initialize the runtime against a home directory.
///
/// Transitions uninitialized → initialized. Fails without a state change if
/// already initialized, already finalized, or if `home` is not a usable home
/// directory. On success returns the runtime banner handed back to the
/// caller as the first payload element.
pub fn initialize(home: &Path) -> Result<Value, BridgeError> {
    init_tracing();

    let mut state = lock_state()?;
    match &*state {
        LifecycleState::Initialized(_) => return Err(RuntimeError::AlreadyInitialized.into()),
        LifecycleState::Finalized => return Err(RuntimeError::Finalized.into()),
        LifecycleState::Uninitialized => {}
    }

    if !home.is_dir() {
        return Err(RuntimeError::BadHome {
            message: format!("{} is not a directory", home.display()),
        }
        .into());
    }
    let config = RuntimeConfig::load(home)?;
    let banner = json!({
        "version": VERSION,
        "home": home.display().to_string(),
        "max_engines": config.limits.max_engines,
    });
    let engines = EngineRegistry::new(config.limits.max_engines);

    tracing::info!(home = %home.display(), version = VERSION, "runtime initialized");

    *state = LifecycleState::Initialized(SiftRuntime {
        home: home.to_path_buf(),
        config,
        engines,
    });
    Ok(banner)
}

/// Finalize the runtime: drop the registry and every live engine.
///
/// Transitions to finalized from any state. Outstanding engine identifiers
/// become invalid; their subsequent use reports a usage error, never a
/// crash. A poisoned lock is reclaimed — finalize always completes.
pub fn finalize() {
    let mut state = match STATE.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    match &*state {
        LifecycleState::Initialized(rt) => {
            tracing::info!(live_engines = rt.engines.len(), "runtime finalized");
        }
        LifecycleState::Uninitialized => {
            tracing::info!("runtime finalized before initialization");
        }
        LifecycleState::Finalized => {
            tracing::debug!("finalize repeated on a finalized runtime");
        }
    }
    *state = LifecycleState::Finalized;
}

/// Run `f` against the live runtime, holding the state lock for the whole
/// call. This is the serialization point for every dispatch operation.
pub fn with_runtime<T>(
    f: impl FnOnce(&mut SiftRuntime) -> Result<T, BridgeError>,
) -> Result<T, BridgeError> {
    let mut state = lock_state()?;
    match &mut *state {
        LifecycleState::Initialized(rt) => f(rt),
        LifecycleState::Uninitialized => Err(RuntimeError::NotInitialized.into()),
        LifecycleState::Finalized => Err(RuntimeError::Finalized.into()),
    }
}

/// Check whether the runtime is currently initialized.
pub fn is_initialized() -> bool {
    matches!(
        STATE.lock().as_deref(),
        Ok(LifecycleState::Initialized(_))
    )
}
