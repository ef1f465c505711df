//! The worker-parallel kernel (`parallel` feature).

use crate::kernel::{checked_body_count, ForceKernel};
use crate::symmetric::accumulate_symmetric;
use orrery_core::{split, StateError};
use rayon::prelude::*;

/// Body count below which thread dispatch costs more than it saves;
/// smaller systems take the serial symmetric path.
pub const PARALLEL_THRESHOLD: usize = 100;

/// Per-body accumulation partitioned across worker threads.
///
/// The acceleration block is split into disjoint 3-wide slices, one per
/// body; each worker reads the shared position and `mu` arrays and
/// writes only its own slice, so the kernel needs no locks or atomics —
/// the invariant is that write ranges never overlap, which the
/// `par_chunks_mut` partition guarantees structurally.
///
/// Each body's sum runs over *all* partners rather than reusing the
/// third-law pairing; sharing a pair term across two bodies would mean
/// two writers per slice. The redundant arithmetic is what buys the
/// synchronization-free layout, and it only pays for itself above
/// [`PARALLEL_THRESHOLD`] bodies.
#[derive(Clone, Copy, Debug)]
pub struct ParallelKernel {
    threshold: usize,
}

impl ParallelKernel {
    /// Kernel with the default serial-fallback threshold.
    pub fn new() -> Self {
        Self {
            threshold: PARALLEL_THRESHOLD,
        }
    }

    /// Override the serial-fallback threshold (0 forces parallel
    /// dispatch for every size; used by the consistency tests).
    pub fn with_threshold(threshold: usize) -> Self {
        Self { threshold }
    }
}

impl Default for ParallelKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceKernel for ParallelKernel {
    fn name(&self) -> &str {
        "parallel"
    }

    fn derivative(&self, state: &[f64], mu: &[f64], out: &mut [f64]) -> Result<(), StateError> {
        let n = checked_body_count(state, mu, out)?;
        let (pos, vel) = split(state, n);
        let (dpos, acc) = out.split_at_mut(3 * n);

        dpos.copy_from_slice(vel);
        acc.fill(0.0);

        if n <= self.threshold {
            accumulate_symmetric(pos, mu, acc);
            return Ok(());
        }

        acc.par_chunks_mut(3).enumerate().for_each(|(i, a)| {
            let xi = pos[3 * i];
            let yi = pos[3 * i + 1];
            let zi = pos[3 * i + 2];

            for j in 0..n {
                if j == i {
                    continue;
                }
                let dx = pos[3 * j] - xi;
                let dy = pos[3 * j + 1] - yi;
                let dz = pos[3 * j + 2] - zi;

                let d2 = dx * dx + dy * dy + dz * dz;
                let w = mu[j] / (d2 * d2.sqrt());

                a[0] += w * dx;
                a[1] += w * dy;
                a[2] += w * dz;
            }
        });
        Ok(())
    }
}
