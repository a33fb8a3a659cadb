//! Exported C symbols.
//!
//! - `lifecycle` — `sift_initialize`, `sift_finalize`
//! - `engine` — the named engine operations (`sift_new_engine`,
//!   `sift_inspect_engine`, `sift_match`, `sift_delete_engine`), thin
//!   wrappers over the generic dispatcher
//! - `dispatch` — `sift_dispatch`, the generic named-operation entry point
//!
//! Buffer construction/release symbols live with the buffer model in
//! `crate::buffer`.

pub mod dispatch;
pub mod engine;
pub mod lifecycle;
