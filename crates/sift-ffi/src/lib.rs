//! # sift-ffi
//!
//! C-ABI bridge for the sift pattern-matching engine.
//! Exposes engine lifecycle and matching to unmanaged callers.
//!
//! Architecture:
//! - `buffer` — length-prefixed `SiftBuffer`/`SiftBufferArray`, the only data
//!   representation that crosses the boundary, plus its ownership/free calls
//! - `runtime` — process-wide lifecycle singleton (uninitialized →
//!   initialized → finalized), serialized behind one lock
//! - `dispatch` — the closed operation table and the generic named-operation
//!   entry point every engine call routes through
//! - `conversions` — status-slot encoding and result-envelope construction
//! - `bindings` — the exported C symbols (lifecycle, engine ops, dispatch)
//!
//! Every exported call returns a `SiftBufferArray` whose element 0 is the
//! status slot (`ok`, or `[ERROR_CODE] message`); ownership of the array
//! transfers to the caller, who must release it exactly once with
//! `sift_buffer_array_free`.

pub mod bindings;
pub mod buffer;
pub mod conversions;
pub mod dispatch;
pub mod runtime;

pub use buffer::{SiftBuffer, SiftBufferArray};
