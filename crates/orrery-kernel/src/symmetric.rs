//! The symmetric all-pairs kernel.

use crate::kernel::{checked_body_count, ForceKernel};
use orrery_core::{split, StateError};

/// Newton's-third-law pairing: each unordered pair `(i, j)`, `j > i`,
/// is evaluated once and applied to both bodies with opposite sign
/// scaled by the partner's `mu`.
///
/// Half the pairwise work of [`ReferenceKernel`]; mathematically the
/// same sum, so results agree to floating-point rounding. This is the
/// default backend.
///
/// [`ReferenceKernel`]: crate::ReferenceKernel
#[derive(Clone, Copy, Debug, Default)]
pub struct SymmetricKernel;

/// Accumulate pair accelerations into `acc` over `j > i`.
///
/// `acc` must be zeroed; shared with the parallel kernel's small-`n`
/// serial path.
pub(crate) fn accumulate_symmetric(pos: &[f64], mu: &[f64], acc: &mut [f64]) {
    let n = mu.len();
    for i in 0..n {
        let xi = pos[3 * i];
        let yi = pos[3 * i + 1];
        let zi = pos[3 * i + 2];
        let mu_i = mu[i];

        for j in (i + 1)..n {
            let dx = pos[3 * j] - xi;
            let dy = pos[3 * j + 1] - yi;
            let dz = pos[3 * j + 2] - zi;

            let d2 = dx * dx + dy * dy + dz * dz;
            let inv_d3 = 1.0 / (d2 * d2.sqrt());

            let fx = dx * inv_d3;
            let fy = dy * inv_d3;
            let fz = dz * inv_d3;

            let mu_j = mu[j];
            acc[3 * i] += mu_j * fx;
            acc[3 * i + 1] += mu_j * fy;
            acc[3 * i + 2] += mu_j * fz;

            acc[3 * j] -= mu_i * fx;
            acc[3 * j + 1] -= mu_i * fy;
            acc[3 * j + 2] -= mu_i * fz;
        }
    }
}

impl ForceKernel for SymmetricKernel {
    fn name(&self) -> &str {
        "symmetric"
    }

    fn derivative(&self, state: &[f64], mu: &[f64], out: &mut [f64]) -> Result<(), StateError> {
        let n = checked_body_count(state, mu, out)?;
        let (pos, vel) = split(state, n);
        let (dpos, acc) = out.split_at_mut(3 * n);

        dpos.copy_from_slice(vel);
        acc.fill(0.0);
        accumulate_symmetric(pos, mu, acc);
        Ok(())
    }
}
