//! The pairwise-table ("broadcast") kernel.

use crate::kernel::{checked_body_count, ForceKernel};
use orrery_core::{split, StateError};

/// Two-pass formulation: materialize the full `n × n × 3` displacement
/// table and the `n × n` inverse-cube distance table, then reduce along
/// the partner axis.
///
/// Same mathematics as the loop kernels but a different computation
/// order, so low-order rounding bits may differ from
/// [`SymmetricKernel`](crate::SymmetricKernel). Self-pairs are removed
/// by setting the diagonal squared distance to +∞, which makes the
/// diagonal inverse-cube weight exactly zero.
///
/// Scratch is `O(n²)` and allocated per call; this variant exists for
/// its auditable structure and as the template for SIMD/offload
/// backends, not as the fast path.
#[derive(Clone, Copy, Debug, Default)]
pub struct VectorizedKernel;

impl ForceKernel for VectorizedKernel {
    fn name(&self) -> &str {
        "vectorized"
    }

    fn derivative(&self, state: &[f64], mu: &[f64], out: &mut [f64]) -> Result<(), StateError> {
        let n = checked_body_count(state, mu, out)?;
        let (pos, vel) = split(state, n);
        let (dpos, acc) = out.split_at_mut(3 * n);

        dpos.copy_from_slice(vel);
        acc.fill(0.0);
        if n < 2 {
            return Ok(());
        }

        // Pass 1: displacement table r_ij = r_j - r_i and the
        // mu_j-weighted inverse-cube distances.
        let mut diff = vec![0.0; n * n * 3];
        let mut weight = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                let cell = i * n + j;
                let dx = pos[3 * j] - pos[3 * i];
                let dy = pos[3 * j + 1] - pos[3 * i + 1];
                let dz = pos[3 * j + 2] - pos[3 * i + 2];
                diff[3 * cell] = dx;
                diff[3 * cell + 1] = dy;
                diff[3 * cell + 2] = dz;

                let d2 = if i == j {
                    f64::INFINITY
                } else {
                    dx * dx + dy * dy + dz * dz
                };
                weight[cell] = mu[j] / (d2 * d2.sqrt());
            }
        }

        // Pass 2: reduce along j.
        for i in 0..n {
            for j in 0..n {
                let cell = i * n + j;
                let w = weight[cell];
                acc[3 * i] += w * diff[3 * cell];
                acc[3 * i + 1] += w * diff[3 * cell + 1];
                acc[3 * i + 2] += w * diff[3 * cell + 2];
            }
        }
        Ok(())
    }
}
