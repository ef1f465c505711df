//! The [`Propagator`]: repeated integration over a time span.

use orrery_core::{body_count, PropagateError};
use orrery_kernel::{select_kernel, KernelSelection, KernelVariant};

use crate::integrator::{Integrator, Scheme, StepScratch};
use crate::trajectory::Trajectory;

/// Drives an [`Integrator`] from an initial time to a final time (or
/// for a fixed number of steps), binding a force kernel chosen through
/// the backend selector as the derivative function.
///
/// # End-time policy
///
/// `propagate()` samples at every step boundary, inclusive of `t0`.
/// When the span is not an exact multiple of `dt`, the final step is
/// truncated so the last sample lands exactly on `t1`; no sample ever
/// overshoots the requested end time.
///
/// # Failure policy
///
/// All validation is eager; once stepping starts, any kernel or
/// integrator error aborts the run and the partial trajectory is
/// discarded. A propagation either completes or returns nothing.
pub struct Propagator {
    integrator: Integrator,
    selection: KernelSelection,
}

impl Propagator {
    /// Propagator with the given scheme and kernel variant.
    ///
    /// `None` requests the default kernel. If the requested variant is
    /// unavailable in this build the selector substitutes the default
    /// and [`fell_back()`](Self::fell_back) reports it; construction
    /// itself never fails.
    pub fn new(scheme: Scheme, variant: Option<KernelVariant>) -> Self {
        Self {
            integrator: Integrator::new(scheme),
            selection: select_kernel(variant),
        }
    }

    /// The integration scheme in use.
    pub fn scheme(&self) -> Scheme {
        self.integrator.scheme()
    }

    /// The kernel variant that actually runs.
    pub fn kernel_variant(&self) -> KernelVariant {
        self.selection.resolved()
    }

    /// True when the requested kernel variant was unavailable and the
    /// default was substituted.
    pub fn fell_back(&self) -> bool {
        self.selection.fell_back()
    }

    /// Propagate from `t0` to `t1` with step size `dt`.
    ///
    /// # Errors
    ///
    /// [`PropagateError::Shape`] if `initial` and `mu` disagree,
    /// [`PropagateError::EmptyTimeSpan`] if `t1 <= t0` or an endpoint
    /// is non-finite, [`PropagateError::InvalidStepSize`] if `dt` is
    /// non-positive or non-finite, [`PropagateError::Step`] if a step
    /// fails mid-run (the partial trajectory is dropped).
    pub fn propagate(
        &self,
        initial: &[f64],
        mu: &[f64],
        t0: f64,
        t1: f64,
        dt: f64,
    ) -> Result<Trajectory, PropagateError> {
        body_count(initial, mu)?;
        if !t0.is_finite() || !t1.is_finite() || t1 <= t0 {
            return Err(PropagateError::EmptyTimeSpan { t0, t1 });
        }
        if !(dt > 0.0) || !dt.is_finite() {
            return Err(PropagateError::InvalidStepSize { dt });
        }

        let expected = ((t1 - t0) / dt).ceil() as usize + 1;
        let mut traj = Trajectory::with_capacity(initial.len(), expected);
        let mut scratch = StepScratch::new(initial.len());
        let kernel = self.selection.kernel();
        let mut f = |y: &[f64], out: &mut [f64]| kernel.derivative(y, mu, out);

        let mut state = initial.to_vec();
        let mut t = t0;
        let mut steps_taken: u64 = 0;
        traj.push(t0, &state);

        // One iteration per step; a caller-side cancellation check
        // slots between iterations without touching the scheme.
        while t < t1 {
            let remaining = t1 - t;
            let truncated = remaining < dt;
            let h = if truncated { remaining } else { dt };

            state = self.integrator.step(&state, h, &mut f, &mut scratch)?;
            steps_taken += 1;
            // Recompute from t0 rather than accumulating, so uniform
            // steps do not drift; a truncated step lands exactly on t1.
            t = if truncated {
                t1
            } else {
                t0 + steps_taken as f64 * dt
            };
            traj.push(t, &state);
        }

        Ok(traj)
    }

    /// Propagate for exactly `steps` steps of size `dt` from `t0`.
    ///
    /// The fixed-step-count twin of [`propagate()`](Self::propagate);
    /// the trajectory holds `steps + 1` samples ending at
    /// `t0 + steps * dt`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`propagate()`](Self::propagate), minus the
    /// time-span check.
    pub fn propagate_steps(
        &self,
        initial: &[f64],
        mu: &[f64],
        t0: f64,
        steps: usize,
        dt: f64,
    ) -> Result<Trajectory, PropagateError> {
        body_count(initial, mu)?;
        if !t0.is_finite() {
            return Err(PropagateError::EmptyTimeSpan { t0, t1: t0 });
        }
        if !(dt > 0.0) || !dt.is_finite() {
            return Err(PropagateError::InvalidStepSize { dt });
        }

        let mut traj = Trajectory::with_capacity(initial.len(), steps + 1);
        let mut scratch = StepScratch::new(initial.len());
        let kernel = self.selection.kernel();
        let mut f = |y: &[f64], out: &mut [f64]| kernel.derivative(y, mu, out);

        let mut state = initial.to_vec();
        traj.push(t0, &state);
        for k in 1..=steps {
            state = self.integrator.step(&state, dt, &mut f, &mut scratch)?;
            traj.push(t0 + k as f64 * dt, &state);
        }
        Ok(traj)
    }
}
