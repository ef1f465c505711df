//! Benchmark profiles and utilities for the Orrery workspace.
//!
//! Provides deterministic body-cloud builders shared by the criterion
//! benches:
//!
//! - [`reference_cloud`]: 64 bodies, below the parallel threshold
//! - [`stress_cloud`]: 512 bodies, well above it

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use orrery_core::{Body, BodyList};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build a deterministic cloud of `n` bodies from `seed`.
///
/// Positions uniform in a 2000-unit cube, speeds up to 10, `mu` spread
/// over four orders of magnitude — enough dynamic range to keep the
/// kernels honest without manufacturing near-coincident pairs.
pub fn body_cloud(n: usize, seed: u64) -> BodyList {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            Body::new(
                format!("body-{i}"),
                rng.random_range(0.1..1e3),
                [
                    rng.random_range(-1e3..1e3),
                    rng.random_range(-1e3..1e3),
                    rng.random_range(-1e3..1e3),
                ],
                [
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                ],
            )
        })
        .collect()
}

/// 64-body profile: small enough that the parallel kernel takes its
/// serial path.
pub fn reference_cloud(seed: u64) -> BodyList {
    body_cloud(64, seed)
}

/// 512-body profile: exercises the worker-parallel path.
pub fn stress_cloud(seed: u64) -> BodyList {
    body_cloud(512, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clouds_are_deterministic() {
        assert_eq!(body_cloud(16, 42), body_cloud(16, 42));
    }

    #[test]
    fn cloud_shapes_are_consistent() {
        let bl = reference_cloud(7);
        assert_eq!(bl.len(), 64);
        assert_eq!(bl.initial_state().len(), 6 * 64);
        assert_eq!(bl.mu_vec().len(), 64);
    }
}
