//! Lifecycle bindings: initialize and finalize.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::path::Path;

use crate::conversions::{self, invalid_argument};
use crate::runtime;

/// Initialize the process-wide runtime against a home directory.
///
/// Must be called before any engine or dispatch call. Returns a
/// status-tagged array; on success element 1 is the runtime banner (JSON:
/// version, home, engine limit). Fails with `[ALREADY_INITIALIZED]` on a
/// second call and `[RUNTIME_FINALIZED]` after `sift_finalize` — one
/// runtime per process lifetime.
///
/// # Safety
/// `home_path` must be a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn sift_initialize(home_path: *const c_char) -> crate::SiftBufferArray {
    let home = if home_path.is_null() {
        None
    } else {
        CStr::from_ptr(home_path).to_str().ok()
    };
    conversions::ffi_boundary(|| {
        let home = home.ok_or_else(|| {
            invalid_argument("home_path must be a valid UTF-8 C string")
        })?;
        let banner = runtime::initialize(Path::new(home))?;
        Ok(vec![banner.to_string().into_bytes()])
    })
}

/// Finalize the runtime, destroying every live engine.
///
/// All outstanding engine identifiers become invalid; subsequent calls
/// report a usage error rather than crashing. Safe to call at any point,
/// including before initialization.
#[no_mangle]
pub extern "C" fn sift_finalize() {
    runtime::finalize();
}
