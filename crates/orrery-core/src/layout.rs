//! Blocked state-vector layout helpers.
//!
//! A state vector for `n` bodies is `6n` values in the **blocked**
//! convention: the `3n` position components first, then the `3n`
//! velocity components. Within each block, body `i` owns three
//! contiguous slots starting at `3 * i`.
//!
//! ```text
//! [ x0 y0 z0  x1 y1 z1  ...  | vx0 vy0 vz0  vx1 vy1 vz1  ... ]
//!   <------ positions ------>  <-------- velocities -------->
//! ```
//!
//! Derivative vectors are state-shaped: the position block holds
//! d(position)/dt (the velocities), the velocity block holds the
//! accelerations.
//!
//! The interleaved-per-body convention (6 consecutive values per body)
//! is not interchangeable with this one; a caller holding interleaved
//! data must reshape explicitly before calling into this workspace.

use crate::error::StateError;

/// State-vector length for `n` bodies.
pub const fn state_dim(n: usize) -> usize {
    6 * n
}

/// Validate `state` against `mu` and return the body count.
///
/// This is the eager shape check every kernel and propagator entry
/// point performs before touching the data.
///
/// # Errors
///
/// [`StateError::LengthMismatch`] if `state.len() != 6 * mu.len()`.
pub fn body_count(state: &[f64], mu: &[f64]) -> Result<usize, StateError> {
    if state.len() != 6 * mu.len() {
        return Err(StateError::LengthMismatch {
            state_len: state.len(),
            mu_len: mu.len(),
        });
    }
    Ok(mu.len())
}

/// Split a validated state into its `(positions, velocities)` blocks.
///
/// Callers must have validated `state.len() == 6 * n` first (via
/// [`body_count`]); this function only slices.
pub fn split(state: &[f64], n: usize) -> (&[f64], &[f64]) {
    debug_assert_eq!(state.len(), 6 * n);
    state.split_at(3 * n)
}

/// Position of body `i` in a blocked state vector.
///
/// # Errors
///
/// [`StateError::LengthMismatch`] on a malformed state,
/// [`StateError::BodyIndex`] if `i >= n`.
pub fn position_of(state: &[f64], mu: &[f64], i: usize) -> Result<[f64; 3], StateError> {
    let n = body_count(state, mu)?;
    if i >= n {
        return Err(StateError::BodyIndex { index: i, n });
    }
    Ok([state[3 * i], state[3 * i + 1], state[3 * i + 2]])
}

/// Velocity of body `i` in a blocked state vector.
///
/// # Errors
///
/// [`StateError::LengthMismatch`] on a malformed state,
/// [`StateError::BodyIndex`] if `i >= n`.
pub fn velocity_of(state: &[f64], mu: &[f64], i: usize) -> Result<[f64; 3], StateError> {
    let n = body_count(state, mu)?;
    if i >= n {
        return Err(StateError::BodyIndex { index: i, n });
    }
    let base = 3 * n + 3 * i;
    Ok([state[base], state[base + 1], state[base + 2]])
}

/// Pack per-body positions and velocities into a blocked state vector.
///
/// Inverse of [`position_of`] / [`velocity_of`]. The two slices must be
/// the same length; their common length is the body count.
///
/// # Panics
///
/// Panics if `positions.len() != velocities.len()` — the two always
/// originate from the same [`BodyList`](crate::BodyList), so a mismatch
/// is a programming error rather than input data.
pub fn pack(positions: &[[f64; 3]], velocities: &[[f64; 3]]) -> Vec<f64> {
    assert_eq!(
        positions.len(),
        velocities.len(),
        "position and velocity counts differ"
    );
    let n = positions.len();
    let mut state = Vec::with_capacity(6 * n);
    for r in positions {
        state.extend_from_slice(r);
    }
    for v in velocities {
        state.extend_from_slice(v);
    }
    state
}
