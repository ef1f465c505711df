//! Error types for the Orrery simulation core.
//!
//! One enum per subsystem: state-vector shape validation, integrator
//! stepping, and propagation. All conditions here are detected eagerly,
//! before any arithmetic begins — never discovered mid-loop.
//!
//! Numerical degeneracy (coincident bodies producing non-finite
//! accelerations) is deliberately *not* an error: the kernels evaluate
//! the mathematical sum as written and let the IEEE result propagate,
//! leaving physical-plausibility checks to callers.

use std::error::Error;
use std::fmt;

/// Shape errors from state-vector validation.
///
/// The contract for every kernel entry point: `state.len() == 6 * mu.len()`,
/// body indices in `[0, n)`, output buffers exactly `6n` long.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// State and `mu` disagree on the body count
    /// (`state.len() != 6 * mu.len()`).
    LengthMismatch {
        /// Length of the offending state vector.
        state_len: usize,
        /// Length of the accompanying `mu` vector.
        mu_len: usize,
    },
    /// A caller-supplied output buffer is not exactly `6n` long.
    OutputLength {
        /// Length of the offending output buffer.
        out_len: usize,
        /// Expected length (`6n`).
        expected: usize,
    },
    /// Body index outside `[0, n)`.
    BodyIndex {
        /// The requested index.
        index: usize,
        /// Number of bodies in the state.
        n: usize,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { state_len, mu_len } => {
                write!(
                    f,
                    "state length {state_len} does not match 6 * mu length ({mu_len})"
                )
            }
            Self::OutputLength { out_len, expected } => {
                write!(f, "output buffer length {out_len}, expected {expected}")
            }
            Self::BodyIndex { index, n } => {
                write!(f, "body index {index} out of range for {n} bodies")
            }
        }
    }
}

impl Error for StateError {}

/// Errors from a single integrator step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepError {
    /// Step size is zero or non-finite.
    InvalidStep {
        /// The offending step size.
        h: f64,
    },
    /// The derivative function rejected its input.
    Derivative(StateError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStep { h } => write!(f, "step size {h} is zero or non-finite"),
            Self::Derivative(e) => write!(f, "derivative evaluation failed: {e}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Derivative(e) => Some(e),
            Self::InvalidStep { .. } => None,
        }
    }
}

impl From<StateError> for StepError {
    fn from(e: StateError) -> Self {
        Self::Derivative(e)
    }
}

/// Errors from a full propagation run.
///
/// A propagation is all-or-nothing: any of these aborts the run and the
/// partial trajectory is dropped, never returned. A silently skipped
/// step would corrupt the physical trajectory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropagateError {
    /// `t1 <= t0`, or an endpoint is non-finite.
    EmptyTimeSpan {
        /// Requested start time.
        t0: f64,
        /// Requested end time.
        t1: f64,
    },
    /// Step size is non-positive or non-finite.
    InvalidStepSize {
        /// The offending step size.
        dt: f64,
    },
    /// Initial state and `mu` disagree on the body count.
    Shape(StateError),
    /// An integrator step failed mid-run.
    Step(StepError),
}

impl fmt::Display for PropagateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTimeSpan { t0, t1 } => {
                write!(f, "time span [{t0}, {t1}] is empty or non-finite")
            }
            Self::InvalidStepSize { dt } => {
                write!(f, "step size {dt} is non-positive or non-finite")
            }
            Self::Shape(e) => write!(f, "initial state rejected: {e}"),
            Self::Step(e) => write!(f, "integration step failed: {e}"),
        }
    }
}

impl Error for PropagateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Shape(e) => Some(e),
            Self::Step(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StateError> for PropagateError {
    fn from(e: StateError) -> Self {
        Self::Shape(e)
    }
}

impl From<StepError> for PropagateError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}
