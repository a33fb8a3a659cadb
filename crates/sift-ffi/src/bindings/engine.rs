//! Named engine operations, each a thin wrapper over the dispatcher.
//!
//! Keeping these on the generic path means the operation table's lookup,
//! arity, and containment rules apply identically whether a caller uses the
//! named symbol or `sift_dispatch`.

use crate::buffer::{self, SiftBuffer};
use crate::conversions::{self, invalid_argument};
use crate::dispatch;
use crate::SiftBufferArray;

/// Create an engine from a JSON config buffer.
///
/// On success element 1 is the fresh engine identifier and element 2 the
/// engine's resolved configuration (JSON).
///
/// # Safety
/// `config`, if non-null, must point to a live `SiftBuffer`.
#[no_mangle]
pub unsafe extern "C" fn sift_new_engine(config: *const SiftBuffer) -> SiftBufferArray {
    let config = buffer::buffer_bytes(config);
    conversions::ffi_boundary(|| {
        let config = config.ok_or_else(|| invalid_argument("config must be a valid buffer"))?;
        dispatch::dispatch("new_engine", None, &[config])
    })
}

/// Describe a live engine. Element 1 is the description (JSON).
///
/// # Safety
/// `engine_id`, if non-null, must point to a live `SiftBuffer`.
#[no_mangle]
pub unsafe extern "C" fn sift_inspect_engine(engine_id: *const SiftBuffer) -> SiftBufferArray {
    let engine_id = buffer::buffer_bytes(engine_id);
    conversions::ffi_boundary(|| {
        let engine_id =
            engine_id.ok_or_else(|| invalid_argument("engine_id must be a valid buffer"))?;
        dispatch::dispatch("inspect_engine", Some(engine_id), &[])
    })
}

/// Run a live engine against an input buffer.
///
/// On success: element 1 is `true`/`false`, element 2 the match structure
/// (JSON), element 3 the leftover byte count (ASCII decimal), element 4 the
/// match diagnostics (JSON).
///
/// # Safety
/// `engine_id` and `input`, if non-null, must each point to a live
/// `SiftBuffer`.
#[no_mangle]
pub unsafe extern "C" fn sift_match(
    engine_id: *const SiftBuffer,
    input: *const SiftBuffer,
) -> SiftBufferArray {
    let engine_id = buffer::buffer_bytes(engine_id);
    let input = buffer::buffer_bytes(input);
    conversions::ffi_boundary(|| {
        let engine_id =
            engine_id.ok_or_else(|| invalid_argument("engine_id must be a valid buffer"))?;
        let input = input.ok_or_else(|| invalid_argument("input must be a valid buffer"))?;
        dispatch::dispatch("match", Some(engine_id), &[input])
    })
}

/// Destroy a live engine. Deleting an unknown identifier reports
/// `[UNKNOWN_ENGINE]` as a normal, non-fatal result.
///
/// # Safety
/// `engine_id`, if non-null, must point to a live `SiftBuffer`.
#[no_mangle]
pub unsafe extern "C" fn sift_delete_engine(engine_id: *const SiftBuffer) -> SiftBufferArray {
    let engine_id = buffer::buffer_bytes(engine_id);
    conversions::ffi_boundary(|| {
        let engine_id =
            engine_id.ok_or_else(|| invalid_argument("engine_id must be a valid buffer"))?;
        dispatch::dispatch("delete_engine", Some(engine_id), &[])
    })
}
