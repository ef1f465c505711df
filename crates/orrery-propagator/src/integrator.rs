//! Fixed-step explicit integration schemes.

use orrery_core::{StateError, StepError};

/// The available stepping schemes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scheme {
    /// First-order explicit Euler. Cheap, mostly useful as a baseline
    /// and for debugging.
    Euler,
    /// Classic fourth-order Runge–Kutta. The default.
    #[default]
    Rk4,
}

/// Pre-allocated stage buffers for the stepping loop.
///
/// RK4 needs four derivative evaluations plus a staging state per step;
/// allocating them once and reusing them keeps the hot loop
/// allocation-free. The buffers resize lazily if the state dimension
/// changes between calls.
#[derive(Clone, Debug)]
pub struct StepScratch {
    k1: Vec<f64>,
    k2: Vec<f64>,
    k3: Vec<f64>,
    k4: Vec<f64>,
    stage: Vec<f64>,
}

impl StepScratch {
    /// Scratch sized for a `dim`-element state vector.
    pub fn new(dim: usize) -> Self {
        Self {
            k1: vec![0.0; dim],
            k2: vec![0.0; dim],
            k3: vec![0.0; dim],
            k4: vec![0.0; dim],
            stage: vec![0.0; dim],
        }
    }

    fn ensure(&mut self, dim: usize) {
        if self.k1.len() != dim {
            *self = Self::new(dim);
        }
    }
}

/// A stateless fixed-step integrator.
///
/// # Contract
///
/// - `step()` is deterministic: identical `state`, `h`, and derivative
///   function produce an identical next state.
/// - The input `state` is never mutated; the next state is a fresh
///   vector.
/// - No simulation state is retained between calls ([`StepScratch`] is
///   plain buffer reuse, overwritten in full every call).
#[derive(Clone, Copy, Debug, Default)]
pub struct Integrator {
    scheme: Scheme,
}

impl Integrator {
    /// Integrator using the given scheme.
    pub fn new(scheme: Scheme) -> Self {
        Self { scheme }
    }

    /// The configured scheme.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Advance `state` by one step of size `h` under the derivative
    /// function `f`.
    ///
    /// `f` receives a state and must write the state-shaped derivative
    /// into its output buffer (the force-kernel calling convention).
    /// `h` may be negative for backward integration.
    ///
    /// # Errors
    ///
    /// [`StepError::InvalidStep`] if `h` is zero or non-finite;
    /// [`StepError::Derivative`] if `f` rejects its input.
    pub fn step<F>(
        &self,
        state: &[f64],
        h: f64,
        f: &mut F,
        scratch: &mut StepScratch,
    ) -> Result<Vec<f64>, StepError>
    where
        F: FnMut(&[f64], &mut [f64]) -> Result<(), StateError>,
    {
        if h == 0.0 || !h.is_finite() {
            return Err(StepError::InvalidStep { h });
        }
        let dim = state.len();
        scratch.ensure(dim);

        match self.scheme {
            Scheme::Euler => {
                f(state, &mut scratch.k1)?;
                let next = state
                    .iter()
                    .zip(&scratch.k1)
                    .map(|(y, k)| y + h * k)
                    .collect();
                Ok(next)
            }
            Scheme::Rk4 => {
                f(state, &mut scratch.k1)?;

                for i in 0..dim {
                    scratch.stage[i] = state[i] + 0.5 * h * scratch.k1[i];
                }
                f(&scratch.stage, &mut scratch.k2)?;

                for i in 0..dim {
                    scratch.stage[i] = state[i] + 0.5 * h * scratch.k2[i];
                }
                f(&scratch.stage, &mut scratch.k3)?;

                for i in 0..dim {
                    scratch.stage[i] = state[i] + h * scratch.k3[i];
                }
                f(&scratch.stage, &mut scratch.k4)?;

                let sixth = h / 6.0;
                let next = (0..dim)
                    .map(|i| {
                        state[i]
                            + sixth
                                * (scratch.k1[i]
                                    + 2.0 * scratch.k2[i]
                                    + 2.0 * scratch.k3[i]
                                    + scratch.k4[i])
                    })
                    .collect();
                Ok(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // y' = y on a one-element "state"; the integrator is
    // dimension-agnostic, the kernels just happen to feed it 6n values.
    fn exp_f(y: &[f64], out: &mut [f64]) -> Result<(), StateError> {
        out[0] = y[0];
        Ok(())
    }

    #[test]
    fn zero_or_non_finite_step_is_rejected() {
        let integ = Integrator::default();
        let mut scratch = StepScratch::new(1);
        for h in [0.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = integ
                .step(&[1.0], h, &mut exp_f, &mut scratch)
                .unwrap_err();
            assert!(matches!(err, StepError::InvalidStep { .. }), "h = {h}");
        }
    }

    #[test]
    fn euler_takes_the_tangent() {
        let integ = Integrator::new(Scheme::Euler);
        let mut scratch = StepScratch::new(1);
        let next = integ.step(&[2.0], 0.5, &mut exp_f, &mut scratch).unwrap();
        assert_eq!(next, vec![3.0]); // 2 + 0.5 * 2
    }

    #[test]
    fn rk4_matches_the_exponential_to_fourth_order() {
        let integ = Integrator::new(Scheme::Rk4);
        let mut scratch = StepScratch::new(1);
        let h = 0.1;
        let next = integ.step(&[1.0], h, &mut exp_f, &mut scratch).unwrap();
        // Local truncation error of RK4 is h^5 / 120 ≈ 8.3e-8 here.
        assert!((next[0] - h.exp()).abs() < 1e-6);
    }

    #[test]
    fn step_is_deterministic_and_leaves_input_alone() {
        let integ = Integrator::default();
        let mut scratch = StepScratch::new(2);
        let state = vec![1.0, -2.0];
        let mut f = |y: &[f64], out: &mut [f64]| {
            out[0] = y[1];
            out[1] = -y[0];
            Ok(())
        };

        let a = integ.step(&state, 0.25, &mut f, &mut scratch).unwrap();
        let b = integ.step(&state, 0.25, &mut f, &mut scratch).unwrap();
        assert_eq!(a, b);
        assert_eq!(state, vec![1.0, -2.0]);
    }

    #[test]
    fn derivative_failure_propagates() {
        let integ = Integrator::default();
        let mut scratch = StepScratch::new(1);
        let mut failing = |_: &[f64], _: &mut [f64]| {
            Err(StateError::LengthMismatch {
                state_len: 1,
                mu_len: 3,
            })
        };
        let err = integ
            .step(&[1.0], 0.1, &mut failing, &mut scratch)
            .unwrap_err();
        assert!(matches!(err, StepError::Derivative(_)));
    }

    #[test]
    fn backward_steps_are_allowed() {
        let integ = Integrator::new(Scheme::Rk4);
        let mut scratch = StepScratch::new(1);
        let fwd = integ.step(&[1.0], 0.1, &mut exp_f, &mut scratch).unwrap();
        let back = integ.step(&fwd, -0.1, &mut exp_f, &mut scratch).unwrap();
        // Truncation errors do not cancel exactly on the way back.
        assert!((back[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn scratch_resizes_between_dimensions() {
        let integ = Integrator::default();
        let mut scratch = StepScratch::new(1);
        integ.step(&[1.0], 0.1, &mut exp_f, &mut scratch).unwrap();

        let mut f2 = |y: &[f64], out: &mut [f64]| {
            out.copy_from_slice(y);
            Ok(())
        };
        let next = integ
            .step(&[1.0, 1.0, 1.0], 0.1, &mut f2, &mut scratch)
            .unwrap();
        assert_eq!(next.len(), 3);
    }
}
