//! Conservation diagnostics: energy and momentum of a single state.
//!
//! These are the first integrals of the N-body problem, used by the
//! test suite as drift checks on long propagations. All quantities are
//! `mu`-weighted (i.e. scaled by the gravitational constant relative to
//! their textbook mass-weighted forms); the scaling is uniform, so
//! conservation over time is unaffected.

use crate::error::StateError;
use crate::layout::{body_count, split};

/// Kinetic energy, `0.5 * Σ_i mu_i |v_i|²`.
///
/// # Errors
///
/// [`StateError::LengthMismatch`] on a malformed state.
pub fn kinetic_energy(state: &[f64], mu: &[f64]) -> Result<f64, StateError> {
    let n = body_count(state, mu)?;
    let (_, vel) = split(state, n);

    let mut e = 0.0;
    for i in 0..n {
        let v2 = vel[3 * i] * vel[3 * i]
            + vel[3 * i + 1] * vel[3 * i + 1]
            + vel[3 * i + 2] * vel[3 * i + 2];
        e += 0.5 * mu[i] * v2;
    }
    Ok(e)
}

/// Potential energy, `-Σ_{i<j} mu_i mu_j / d_ij`.
///
/// Coincident pairs (`d == 0`) are skipped rather than contributing an
/// infinity; this diagnostic exists to measure drift, not to validate
/// configurations.
///
/// # Errors
///
/// [`StateError::LengthMismatch`] on a malformed state.
pub fn potential_energy(state: &[f64], mu: &[f64]) -> Result<f64, StateError> {
    let n = body_count(state, mu)?;
    let (pos, _) = split(state, n);

    let mut e = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let dx = pos[3 * j] - pos[3 * i];
            let dy = pos[3 * j + 1] - pos[3 * i + 1];
            let dz = pos[3 * j + 2] - pos[3 * i + 2];
            let d = (dx * dx + dy * dy + dz * dz).sqrt();
            if d > 0.0 {
                e -= mu[i] * mu[j] / d;
            }
        }
    }
    Ok(e)
}

/// Total energy, kinetic plus potential.
///
/// # Errors
///
/// [`StateError::LengthMismatch`] on a malformed state.
pub fn total_energy(state: &[f64], mu: &[f64]) -> Result<f64, StateError> {
    Ok(kinetic_energy(state, mu)? + potential_energy(state, mu)?)
}

/// Linear momentum, `Σ_i mu_i v_i`.
///
/// # Errors
///
/// [`StateError::LengthMismatch`] on a malformed state.
pub fn linear_momentum(state: &[f64], mu: &[f64]) -> Result<[f64; 3], StateError> {
    let n = body_count(state, mu)?;
    let (_, vel) = split(state, n);

    let mut p = [0.0; 3];
    for i in 0..n {
        p[0] += mu[i] * vel[3 * i];
        p[1] += mu[i] * vel[3 * i + 1];
        p[2] += mu[i] * vel[3 * i + 2];
    }
    Ok(p)
}

/// Angular momentum about the origin, `Σ_i mu_i (r_i × v_i)`.
///
/// # Errors
///
/// [`StateError::LengthMismatch`] on a malformed state.
pub fn angular_momentum(state: &[f64], mu: &[f64]) -> Result<[f64; 3], StateError> {
    let n = body_count(state, mu)?;
    let (pos, vel) = split(state, n);

    let mut h = [0.0; 3];
    for i in 0..n {
        let (rx, ry, rz) = (pos[3 * i], pos[3 * i + 1], pos[3 * i + 2]);
        let (vx, vy, vz) = (vel[3 * i], vel[3 * i + 1], vel[3 * i + 2]);
        h[0] += mu[i] * (ry * vz - rz * vy);
        h[1] += mu[i] * (rz * vx - rx * vz);
        h[2] += mu[i] * (rx * vy - ry * vx);
    }
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Circular two-body configuration: separation 2, each body on a
    // unit circle about the barycentre.
    fn two_body() -> (Vec<f64>, Vec<f64>) {
        let state = vec![
            -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, // positions
            0.0, -0.5, 0.0, 0.0, 0.5, 0.0, // velocities
        ];
        (state, vec![1.0, 1.0])
    }

    #[test]
    fn two_body_energies() {
        let (state, mu) = two_body();
        assert_eq!(kinetic_energy(&state, &mu).unwrap(), 0.25);
        assert_eq!(potential_energy(&state, &mu).unwrap(), -0.5);
        assert_eq!(total_energy(&state, &mu).unwrap(), -0.25);
    }

    #[test]
    fn symmetric_pair_has_zero_linear_momentum() {
        let (state, mu) = two_body();
        let p = linear_momentum(&state, &mu).unwrap();
        assert_eq!(p, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn two_body_angular_momentum_is_along_z() {
        let (state, mu) = two_body();
        let h = angular_momentum(&state, &mu).unwrap();
        // Each body: |r| = 1, |v| = 0.5, r ⊥ v, both prograde.
        assert_eq!(h, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn coincident_pair_is_skipped_in_potential() {
        let state = vec![0.0; 12];
        let mu = vec![1.0, 1.0];
        let e = potential_energy(&state, &mu).unwrap();
        assert!(e.is_finite());
        assert_eq!(e, 0.0);
    }

    #[test]
    fn empty_system_has_zero_integrals() {
        assert_eq!(total_energy(&[], &[]).unwrap(), 0.0);
        assert_eq!(linear_momentum(&[], &[]).unwrap(), [0.0; 3]);
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let state = vec![0.0; 7];
        let mu = vec![1.0];
        assert!(kinetic_energy(&state, &mu).is_err());
        assert!(angular_momentum(&state, &mu).is_err());
    }
}
