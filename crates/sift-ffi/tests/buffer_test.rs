//! Tests for the cross-boundary buffer model, exercised through the
//! exported C surface.

use std::ptr;

use sift_ffi::buffer::{sift_buffer_copy, sift_buffer_free, sift_buffer_new};
use sift_ffi::SiftBuffer;

/// Read a buffer's payload without taking ownership.
unsafe fn bytes_of(b: *const SiftBuffer) -> Vec<u8> {
    let buffer = &*b;
    if buffer.len == 0 {
        return Vec::new();
    }
    std::slice::from_raw_parts(buffer.ptr, buffer.len as usize).to_vec()
}

#[test]
fn test_new_buffer_copies_payload() {
    let payload = b"status\x00binary\xffpayload";
    unsafe {
        let b = sift_buffer_new(payload.as_ptr(), payload.len() as u32);
        assert!(!b.is_null());
        assert_eq!((*b).len as usize, payload.len());
        assert_eq!(bytes_of(b), payload);
        // The buffer owns independent storage, not the caller's bytes.
        assert_ne!((*b).ptr as *const u8, payload.as_ptr());
        sift_buffer_free(b);
    }
}

#[test]
fn test_empty_buffer_is_valid() {
    unsafe {
        let b = sift_buffer_new(ptr::null(), 0);
        assert!(!b.is_null());
        assert_eq!((*b).len, 0);
        sift_buffer_free(b);
    }
}

#[test]
fn test_null_data_with_nonzero_len_is_rejected() {
    unsafe {
        assert!(sift_buffer_new(ptr::null(), 4).is_null());
    }
}

#[test]
fn test_copy_yields_identical_content_in_distinct_storage() {
    let payload = b"copy me";
    unsafe {
        let original = sift_buffer_new(payload.as_ptr(), payload.len() as u32);
        let copy = sift_buffer_copy(original);
        assert!(!copy.is_null());

        assert_eq!(bytes_of(original), bytes_of(copy));
        assert_ne!((*original).ptr, (*copy).ptr);

        // Writing through one backing store must not affect the other.
        *(*original).ptr = b'X';
        assert_eq!(bytes_of(copy), payload);

        sift_buffer_free(original);
        sift_buffer_free(copy);
    }
}

#[test]
fn test_copy_of_null_is_null() {
    unsafe {
        assert!(sift_buffer_copy(ptr::null()).is_null());
    }
}

#[test]
fn test_free_of_null_is_a_noop() {
    unsafe {
        sift_buffer_free(ptr::null_mut());
    }
}
