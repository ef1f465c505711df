//! The [`Trajectory`] result type.

/// An ordered sequence of `(time, state)` samples.
///
/// Append-only while the propagator owns it; handed to the caller as an
/// immutable result. States are stored as one flat `len × dim` buffer
/// in the blocked layout, matching the kernels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    dim: usize,
    times: Vec<f64>,
    data: Vec<f64>,
}

impl Trajectory {
    pub(crate) fn with_capacity(dim: usize, samples: usize) -> Self {
        Self {
            dim,
            times: Vec::with_capacity(samples),
            data: Vec::with_capacity(samples * dim),
        }
    }

    pub(crate) fn push(&mut self, t: f64, state: &[f64]) {
        debug_assert_eq!(state.len(), self.dim);
        self.times.push(t);
        self.data.extend_from_slice(state);
    }

    /// Number of samples (steps taken plus one for the initial state).
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True when no samples were recorded.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// State-vector length (`6n`).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Timestamp of sample `k`.
    pub fn time(&self, k: usize) -> Option<f64> {
        self.times.get(k).copied()
    }

    /// State of sample `k`.
    pub fn state(&self, k: usize) -> Option<&[f64]> {
        if k >= self.len() {
            return None;
        }
        Some(&self.data[k * self.dim..(k + 1) * self.dim])
    }

    /// All timestamps in order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// The final sample's timestamp.
    pub fn last_time(&self) -> Option<f64> {
        self.times.last().copied()
    }

    /// The final sample's state.
    pub fn last_state(&self) -> Option<&[f64]> {
        self.state(self.len().checked_sub(1)?)
    }

    /// Iterate over `(time, state)` samples in order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &[f64])> {
        (0..self.len()).map(|k| {
            (
                self.times[k],
                &self.data[k * self.dim..(k + 1) * self.dim],
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_come_back_in_order() {
        let mut traj = Trajectory::with_capacity(2, 3);
        traj.push(0.0, &[1.0, 2.0]);
        traj.push(0.5, &[3.0, 4.0]);
        traj.push(1.0, &[5.0, 6.0]);

        assert_eq!(traj.len(), 3);
        assert_eq!(traj.time(1), Some(0.5));
        assert_eq!(traj.state(1), Some(&[3.0, 4.0][..]));
        assert_eq!(traj.last_time(), Some(1.0));
        assert_eq!(traj.last_state(), Some(&[5.0, 6.0][..]));
        assert_eq!(traj.state(3), None);

        let collected: Vec<f64> = traj.iter().map(|(t, _)| t).collect();
        assert_eq!(collected, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn empty_trajectory_has_no_last() {
        let traj = Trajectory::default();
        assert!(traj.is_empty());
        assert_eq!(traj.last_state(), None);
        assert_eq!(traj.last_time(), None);
    }
}
