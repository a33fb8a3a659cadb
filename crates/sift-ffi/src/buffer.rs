//! The cross-boundary buffer model.
//!
//! `SiftBuffer` is a length-prefixed byte payload; `SiftBufferArray` is the
//! uniform result envelope. Length is authoritative — payloads may contain
//! NUL and are never null-terminated. Every buffer has exactly one owner at
//! a time: the bridge hands storage to the caller on return and never
//! touches it again, and the caller hands it back exactly once through the
//! matching free call.
//!
//! Payload allocation is fallible (`try_reserve_exact`), so exhaustion
//! surfaces as an `[ALLOC_FAILED]` result instead of aborting the process.

use std::ptr;
use std::slice;

/// A length-prefixed byte buffer crossing the C boundary.
#[repr(C)]
pub struct SiftBuffer {
    pub len: u32,
    pub ptr: *mut u8,
}

/// An ordered collection of owned buffers; the result envelope of every
/// boundary call. `n` equals the number of valid elements. `{0, null}` is
/// returned only when allocating the envelope itself failed.
#[repr(C)]
pub struct SiftBufferArray {
    pub n: u32,
    pub ptr: *mut *mut SiftBuffer,
}

/// Marker for a failed fallible allocation.
pub(crate) struct AllocFailure;

/// Copy `bytes` into freshly owned storage, returning the raw parts.
fn try_box_bytes(bytes: &[u8]) -> Result<(*mut u8, u32), AllocFailure> {
    if bytes.len() > u32::MAX as usize {
        return Err(AllocFailure);
    }
    let mut storage: Vec<u8> = Vec::new();
    storage.try_reserve_exact(bytes.len()).map_err(|_| AllocFailure)?;
    storage.extend_from_slice(bytes);
    let len = storage.len() as u32;
    let ptr = Box::into_raw(storage.into_boxed_slice()) as *mut u8;
    Ok((ptr, len))
}

/// Allocate a bridge-owned buffer holding a deep copy of `bytes`.
pub(crate) fn try_alloc_buffer(bytes: &[u8]) -> Result<*mut SiftBuffer, AllocFailure> {
    let (ptr, len) = try_box_bytes(bytes)?;
    Ok(Box::into_raw(Box::new(SiftBuffer { len, ptr })))
}

/// Allocate an array owning one buffer per part.
///
/// On failure everything allocated so far is released; the caller either
/// receives a fully formed array or nothing.
pub(crate) fn try_alloc_array(parts: Vec<Vec<u8>>) -> Result<SiftBufferArray, AllocFailure> {
    let mut elements: Vec<*mut SiftBuffer> = Vec::new();
    elements.try_reserve_exact(parts.len()).map_err(|_| AllocFailure)?;
    for part in &parts {
        match try_alloc_buffer(part) {
            Ok(buffer) => elements.push(buffer),
            Err(_) => {
                for buffer in elements {
                    // SAFETY: each element was allocated by try_alloc_buffer
                    // above and is owned exclusively by this function.
                    unsafe { drop_buffer(buffer) };
                }
                return Err(AllocFailure);
            }
        }
    }
    let n = elements.len() as u32;
    let ptr = Box::into_raw(elements.into_boxed_slice()) as *mut *mut SiftBuffer;
    Ok(SiftBufferArray { n, ptr })
}

/// View the payload of a caller-supplied buffer.
///
/// Returns `None` for a null buffer, or for a non-empty buffer with a null
/// data pointer. The empty buffer is a valid empty slice.
///
/// # Safety
/// `b`, if non-null, must point to a live `SiftBuffer` whose `ptr`/`len`
/// describe readable memory for the chosen lifetime.
pub(crate) unsafe fn buffer_bytes<'a>(b: *const SiftBuffer) -> Option<&'a [u8]> {
    if b.is_null() {
        return None;
    }
    let buffer = &*b;
    if buffer.len == 0 {
        return Some(&[]);
    }
    if buffer.ptr.is_null() {
        return None;
    }
    Some(slice::from_raw_parts(buffer.ptr, buffer.len as usize))
}

/// Release one bridge-allocated buffer: payload storage, then the header.
///
/// # Safety
/// `b` must be null or a pointer obtained from this module's allocators,
/// not yet released.
pub(crate) unsafe fn drop_buffer(b: *mut SiftBuffer) {
    if b.is_null() {
        return;
    }
    let header = Box::from_raw(b);
    if !header.ptr.is_null() {
        let payload = ptr::slice_from_raw_parts_mut(header.ptr, header.len as usize);
        drop(Box::from_raw(payload));
    }
}

/// Create a bridge-owned buffer by deep-copying `len` bytes from `data`.
///
/// Returns null if `data` is null with `len > 0`, or if allocation fails.
/// The caller owns the result and must release it with `sift_buffer_free`.
///
/// # Safety
/// `data`, if non-null, must be readable for `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn sift_buffer_new(data: *const u8, len: u32) -> *mut SiftBuffer {
    if data.is_null() && len > 0 {
        return ptr::null_mut();
    }
    let bytes = if len == 0 {
        &[][..]
    } else {
        slice::from_raw_parts(data, len as usize)
    };
    try_alloc_buffer(bytes).unwrap_or(ptr::null_mut())
}

/// Deep-copy a buffer into independent storage with identical length and
/// content. Returns null for an invalid source or failed allocation.
///
/// # Safety
/// `src`, if non-null, must point to a live `SiftBuffer`.
#[no_mangle]
pub unsafe extern "C" fn sift_buffer_copy(src: *const SiftBuffer) -> *mut SiftBuffer {
    match buffer_bytes(src) {
        Some(bytes) => try_alloc_buffer(bytes).unwrap_or(ptr::null_mut()),
        None => ptr::null_mut(),
    }
}

/// Release a buffer previously returned by this library. Null is a no-op.
///
/// A buffer owned by a `SiftBufferArray` must be released through
/// `sift_buffer_array_free` instead, never individually.
///
/// # Safety
/// `b` must be null or an unreleased pointer returned by this library, and
/// must not be used after this call.
#[no_mangle]
pub unsafe extern "C" fn sift_buffer_free(b: *mut SiftBuffer) {
    drop_buffer(b);
}

/// Release a buffer array: every element, then the backing array.
/// The degenerate `{0, null}` array is a no-op.
///
/// # Safety
/// `a` must be a value returned by this library whose elements have not been
/// individually released; neither the array nor its elements may be used
/// after this call.
#[no_mangle]
pub unsafe extern "C" fn sift_buffer_array_free(a: SiftBufferArray) {
    if a.ptr.is_null() {
        return;
    }
    let elements = ptr::slice_from_raw_parts_mut(a.ptr, a.n as usize);
    let elements = Box::from_raw(elements);
    for &element in elements.iter() {
        drop_buffer(element);
    }
}
