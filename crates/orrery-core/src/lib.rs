//! Core types for the Orrery N-body simulation workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the state-vector layout, the body data model, the error types shared
//! by the kernel and propagator crates, and the conservation diagnostics
//! used as drift checks.
//!
//! # State layout
//!
//! Every state vector in this workspace uses the **blocked** convention:
//! for `n` bodies the vector holds all `3n` position components first,
//! then all `3n` velocity components. Body `i`'s position starts at
//! `3 * i` and its velocity at `3 * n + 3 * i`. The interleaved-per-body
//! convention (6 consecutive values per body) is *not* accepted anywhere;
//! callers holding interleaved data must reshape before entering this
//! workspace. See [`layout`] for the accessors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod body;
pub mod error;
pub mod integrals;
pub mod layout;

pub use body::{Body, BodyList};
pub use error::{PropagateError, StateError, StepError};
pub use layout::{body_count, pack, position_of, split, state_dim, velocity_of};
