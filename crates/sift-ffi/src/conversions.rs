//! Status-slot encoding and result-envelope construction.
//!
//! Every boundary call returns a `SiftBufferArray` following one convention:
//! element 0 is the status slot (the bytes `ok` on success, or the
//! structured `[ERROR_CODE] message` string on failure) and elements 1…
//! are the operation's positional payloads. Callers must inspect the status
//! slot before interpreting anything else.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

use sift_core::errors::{error_code, BridgeError};

use crate::buffer::{self, SiftBufferArray};

/// Status-slot contents of a successful call.
pub const STATUS_OK: &[u8] = b"ok";

/// Build an `[INVALID_ARGUMENT]` boundary error.
pub(crate) fn invalid_argument(message: impl Into<String>) -> BridgeError {
    BridgeError::new(error_code::INVALID_ARGUMENT, message.into())
}

/// Encode an operation result into the caller-owned envelope.
///
/// Ownership of the returned array and all its elements transfers to the
/// caller. If the success envelope cannot be allocated the call degrades to
/// an `[ALLOC_FAILED]` error result; if even that fails, to `{0, null}`.
pub(crate) fn encode_result(result: Result<Vec<Vec<u8>>, BridgeError>) -> SiftBufferArray {
    match result {
        Ok(payloads) => {
            let mut parts = Vec::with_capacity(payloads.len() + 1);
            parts.push(STATUS_OK.to_vec());
            parts.extend(payloads);
            match buffer::try_alloc_array(parts) {
                Ok(array) => array,
                Err(_) => error_array(&BridgeError::new(
                    error_code::ALLOC_FAILED,
                    "allocation failed while encoding the result".to_string(),
                )),
            }
        }
        Err(e) => error_array(&e),
    }
}

/// Encode an error-tagged envelope: the status slot alone.
fn error_array(err: &BridgeError) -> SiftBufferArray {
    match buffer::try_alloc_array(vec![err.to_string().into_bytes()]) {
        Ok(array) => array,
        Err(_) => SiftBufferArray {
            n: 0,
            ptr: ptr::null_mut(),
        },
    }
}

/// Run a boundary entry point to completion without unwinding.
///
/// The dispatcher already contains engine panics; this is the outer
/// backstop that keeps argument parsing and envelope encoding from ever
/// unwinding across an `extern "C"` frame.
pub(crate) fn ffi_boundary(
    f: impl FnOnce() -> Result<Vec<Vec<u8>>, BridgeError>,
) -> SiftBufferArray {
    let result = catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        Err(BridgeError::new(
            error_code::INTERNAL_ERROR,
            "panic reached the bridge entry point".to_string(),
        ))
    });
    encode_result(result)
}
