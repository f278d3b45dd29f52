//! Internal graph accessors and low-level building blocks.
//!
//! This module is intentionally `pub(crate)`: traversal strategies share the
//! per-vertex marks defined here, and only the types re-exported by
//! `graph::traversal` are part of the public API surface.

pub(crate) mod visited;
