//! Time integration and trajectory propagation for the Orrery workspace.
//!
//! [`Integrator`] advances a state vector by one fixed step under a
//! supplied derivative function; [`Propagator`] drives it across a time
//! span with a kernel chosen through the backend selector, assembling a
//! [`Trajectory`] of `(time, state)` samples.
//!
//! The stepping loop is strictly sequential — step `k + 1` depends on
//! step `k`'s output state — and a propagation is all-or-nothing: any
//! kernel or integrator error aborts the run and no partial trajectory
//! is returned.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod integrator;
pub mod propagator;
pub mod trajectory;

pub use integrator::{Integrator, Scheme, StepScratch};
pub use propagator::Propagator;
pub use trajectory::Trajectory;
