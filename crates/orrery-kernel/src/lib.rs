//! Pairwise point-mass gravity kernels for the Orrery workspace.
//!
//! Four interchangeable implementations of the same mathematical
//! contract, selected through one interface:
//!
//! 1. [`ReferenceKernel`] — every ordered pair, easiest to audit.
//! 2. [`SymmetricKernel`] — Newton's-third-law pairing, half the work.
//! 3. [`VectorizedKernel`] — pairwise-table formulation, reduction along
//!    the partner axis.
//! 4. [`ParallelKernel`] — per-body accumulation across worker threads
//!    (`parallel` feature, on by default).
//!
//! All variants agree within floating-point rounding (the consistency
//! suite enforces 1e-10 relative tolerance), never bit-exactly: the
//! summation orders differ. Use [`select_kernel`] to obtain a kernel
//! handle; requesting an unavailable variant falls back to
//! [`SymmetricKernel`] with a warning, never an error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod kernel;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod reference;
pub mod select;
pub mod symmetric;
pub mod vectorized;

pub use kernel::ForceKernel;
#[cfg(feature = "parallel")]
pub use parallel::{ParallelKernel, PARALLEL_THRESHOLD};
pub use reference::ReferenceKernel;
pub use select::{select_kernel, KernelSelection, KernelVariant};
pub use symmetric::SymmetricKernel;
pub use vectorized::VectorizedKernel;
