//! The generic dispatch binding.

use std::ffi::CStr;
use std::os::raw::c_char;

use crate::buffer::{self, SiftBuffer};
use crate::conversions::{self, invalid_argument};
use crate::dispatch;
use crate::SiftBufferArray;

/// Invoke a named operation on the runtime.
///
/// `name` selects an operation from the closed table (`new_engine`,
/// `inspect_engine`, `match`, `delete_engine`). `engine_id` addresses the
/// target engine for engine-scoped operations and may be null otherwise.
/// `args` points to `nargs` buffer pointers, the operation's positional
/// arguments. The result is always a status-tagged array owned by the
/// caller.
///
/// # Safety
/// `name` must be a valid null-terminated C string; `engine_id`, if
/// non-null, must point to a live `SiftBuffer`; `args`, if `nargs > 0`,
/// must point to `nargs` valid `SiftBuffer` pointers.
#[no_mangle]
pub unsafe extern "C" fn sift_dispatch(
    name: *const c_char,
    engine_id: *const SiftBuffer,
    args: *const *const SiftBuffer,
    nargs: u32,
) -> SiftBufferArray {
    let name = if name.is_null() {
        None
    } else {
        CStr::from_ptr(name).to_str().ok()
    };
    let engine_id = buffer::buffer_bytes(engine_id);

    let mut arg_slices: Vec<&[u8]> = Vec::with_capacity(nargs as usize);
    let mut bad_arg: Option<u32> = None;
    if nargs > 0 && args.is_null() {
        bad_arg = Some(0);
    } else {
        for i in 0..nargs {
            match buffer::buffer_bytes(*args.add(i as usize)) {
                Some(bytes) => arg_slices.push(bytes),
                None => {
                    bad_arg = Some(i);
                    break;
                }
            }
        }
    }

    conversions::ffi_boundary(|| {
        let name = name
            .ok_or_else(|| invalid_argument("operation name must be a valid UTF-8 C string"))?;
        if let Some(i) = bad_arg {
            return Err(invalid_argument(format!("argument {i} is not a valid buffer")));
        }
        dispatch::dispatch(name, engine_id, &arg_slices)
    })
}
