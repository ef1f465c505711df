//! The [`ForceKernel`] trait: the derivative-function boundary.

use orrery_core::{body_count, StateError};

/// A point-mass Newtonian gravity kernel.
///
/// Computes the time derivative of a blocked state vector: the position
/// block of the output receives the input velocities unchanged, the
/// velocity block receives the pairwise gravitational accelerations
///
/// ```text
/// a_i = Σ_{j≠i} mu_j · (r_j − r_i) / |r_j − r_i|³
/// ```
///
/// # Contract
///
/// - `derivative()` MUST be a pure evaluation: same inputs, identical
///   outputs, no retained state (`&self`).
/// - The `out` buffer is exactly `6n` long and is overwritten in full;
///   no stale values survive a call.
/// - Self-pairs (`i == j`) are excluded by loop structure, never by a
///   zero-distance guard. Coincident *distinct* bodies divide by zero
///   and the IEEE infinity/NaN propagates into the output — validating
///   configurations is the caller's job, not the kernel's.
/// - `n == 0` and `n == 1` are valid and yield an all-zero acceleration
///   block.
/// - Shape validation happens before any arithmetic; a shape error
///   leaves `out` untouched.
///
/// # Object safety
///
/// The trait is object-safe; the selector hands kernels out as
/// `Box<dyn ForceKernel>`.
pub trait ForceKernel: Send + Sync {
    /// Variant name for reporting and telemetry.
    fn name(&self) -> &str;

    /// Write the derivative of `state` into `out`.
    ///
    /// # Errors
    ///
    /// [`StateError::LengthMismatch`] if `state.len() != 6 * mu.len()`;
    /// [`StateError::OutputLength`] if `out.len() != state.len()`.
    fn derivative(&self, state: &[f64], mu: &[f64], out: &mut [f64]) -> Result<(), StateError>;

    /// Allocate a fresh output buffer and write the derivative into it.
    ///
    /// Convenience for callers that do not manage their own buffers;
    /// the propagation hot loop uses [`derivative()`](Self::derivative)
    /// with a reused buffer instead.
    ///
    /// # Errors
    ///
    /// Same conditions as [`derivative()`](Self::derivative).
    fn derivative_alloc(&self, state: &[f64], mu: &[f64]) -> Result<Vec<f64>, StateError> {
        let mut out = vec![0.0; state.len()];
        self.derivative(state, mu, &mut out)?;
        Ok(out)
    }
}

/// Validate the three buffers of a kernel call and return the body count.
pub(crate) fn checked_body_count(
    state: &[f64],
    mu: &[f64],
    out: &[f64],
) -> Result<usize, StateError> {
    let n = body_count(state, mu)?;
    if out.len() != state.len() {
        return Err(StateError::OutputLength {
            out_len: out.len(),
            expected: state.len(),
        });
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceKernel;

    #[test]
    fn wrong_output_length_is_rejected() {
        let state = vec![0.0; 12];
        let mu = vec![1.0, 1.0];
        let mut out = vec![0.0; 11];
        assert_eq!(
            ReferenceKernel.derivative(&state, &mu, &mut out),
            Err(StateError::OutputLength {
                out_len: 11,
                expected: 12,
            })
        );
    }

    #[test]
    fn derivative_alloc_matches_buffer_form() {
        let state = vec![
            -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
            0.0, -0.5, 0.0, 0.0, 0.5, 0.0,
        ];
        let mu = vec![1.0, 1.0];

        let alloc = ReferenceKernel.derivative_alloc(&state, &mu).unwrap();
        let mut buf = vec![f64::NAN; 12];
        ReferenceKernel.derivative(&state, &mu, &mut buf).unwrap();

        assert_eq!(alloc, buf);
    }
}
