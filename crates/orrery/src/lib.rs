//! Orrery: exact all-pairs N-body gravitation under Newtonian point
//! masses.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the Orrery sub-crates. For most users, adding `orrery` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! Propagate a circular two-body orbit for one full period and confirm
//! it comes home:
//!
//! ```rust
//! use orrery::{Body, BodyList, Propagator, Scheme};
//!
//! let system = BodyList::new(vec![
//!     Body::new("a", 1.0, [-1.0, 0.0, 0.0], [0.0, -0.5, 0.0]),
//!     Body::new("b", 1.0, [1.0, 0.0, 0.0], [0.0, 0.5, 0.0]),
//! ]);
//! let initial = system.initial_state();
//! let mu = system.mu_vec();
//!
//! let period = 4.0 * std::f64::consts::PI;
//! let propagator = Propagator::new(Scheme::Rk4, None);
//! let trajectory = propagator
//!     .propagate(&initial, &mu, 0.0, period, 1e-3)
//!     .unwrap();
//!
//! let last = trajectory.last_state().unwrap();
//! for (a, b) in last.iter().zip(&initial) {
//!     assert!((a - b).abs() < 1e-6);
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in
//! the top-level re-exports:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `orrery-core` | State layout, body model, errors, conservation diagnostics |
//! | [`kernel`] | `orrery-kernel` | Force-kernel variants and the backend selector |
//! | [`propagator`] | `orrery-propagator` | Integration schemes, propagation, trajectories |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// State layout, body model, errors, and conservation diagnostics
/// (`orrery-core`).
pub use orrery_core as types;

/// Force kernels and backend selection (`orrery-kernel`).
pub use orrery_kernel as kernel;

/// Integrators, the propagation driver, and trajectories
/// (`orrery-propagator`).
pub use orrery_propagator as propagator;

pub use orrery_core::{
    body_count, pack, position_of, split, state_dim, velocity_of, Body, BodyList, PropagateError,
    StateError, StepError,
};
pub use orrery_kernel::{
    select_kernel, ForceKernel, KernelSelection, KernelVariant, ReferenceKernel, SymmetricKernel,
    VectorizedKernel,
};
#[cfg(feature = "parallel")]
pub use orrery_kernel::{ParallelKernel, PARALLEL_THRESHOLD};
pub use orrery_propagator::{Integrator, Propagator, Scheme, StepScratch, Trajectory};
