//! The reference all-pairs kernel.

use crate::kernel::{checked_body_count, ForceKernel};
use orrery_core::{split, StateError};

/// Direct evaluation over every ordered pair.
///
/// Does `n(n−1)` pairwise terms where [`SymmetricKernel`] does half
/// that; kept as the verification baseline because the inner loop is a
/// literal transcription of the acceleration sum.
///
/// [`SymmetricKernel`]: crate::SymmetricKernel
#[derive(Clone, Copy, Debug, Default)]
pub struct ReferenceKernel;

impl ForceKernel for ReferenceKernel {
    fn name(&self) -> &str {
        "reference"
    }

    fn derivative(&self, state: &[f64], mu: &[f64], out: &mut [f64]) -> Result<(), StateError> {
        let n = checked_body_count(state, mu, out)?;
        let (pos, vel) = split(state, n);
        let (dpos, acc) = out.split_at_mut(3 * n);

        dpos.copy_from_slice(vel);
        acc.fill(0.0);

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let dx = pos[3 * j] - pos[3 * i];
                let dy = pos[3 * j + 1] - pos[3 * i + 1];
                let dz = pos[3 * j + 2] - pos[3 * i + 2];

                let d2 = dx * dx + dy * dy + dz * dz;
                let inv_d3 = 1.0 / (d2 * d2.sqrt());

                acc[3 * i] += mu[j] * dx * inv_d3;
                acc[3 * i + 1] += mu[j] * dy * inv_d3;
                acc[3 * i + 2] += mu[j] * dz * inv_d3;
            }
        }
        Ok(())
    }
}
