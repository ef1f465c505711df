//! End-to-end scenario: a circular two-body orbit.
//!
//! Equal bodies with `mu = 1` at `±x̂`, tangential speed 0.5: each body
//! circles the barycentre with radius 1, angular rate `ω = 0.5`, period
//! `T = 4π`. One full period under RK4 must return the system to its
//! starting configuration.

use orrery_core::integrals::{angular_momentum, total_energy};
use orrery_core::{Body, BodyList};
use orrery_propagator::{Propagator, Scheme};

const PERIOD: f64 = 4.0 * std::f64::consts::PI;

fn circular_pair() -> BodyList {
    BodyList::new(vec![
        Body::new("a", 1.0, [-1.0, 0.0, 0.0], [0.0, -0.5, 0.0]),
        Body::new("b", 1.0, [1.0, 0.0, 0.0], [0.0, 0.5, 0.0]),
    ])
}

#[test]
fn one_period_returns_to_the_start() {
    let bl = circular_pair();
    let initial = bl.initial_state();
    let mu = bl.mu_vec();

    let p = Propagator::new(Scheme::Rk4, None);
    let traj = p.propagate(&initial, &mu, 0.0, PERIOD, 1e-3).unwrap();

    assert_eq!(traj.last_time(), Some(PERIOD));
    let last = traj.last_state().unwrap();
    for (k, (a, b)) in last.iter().zip(&initial).enumerate() {
        assert!(
            (a - b).abs() < 1e-6,
            "component {k} did not return: {a} vs {b}"
        );
    }
}

#[test]
fn energy_and_angular_momentum_hold_over_a_period() {
    let bl = circular_pair();
    let initial = bl.initial_state();
    let mu = bl.mu_vec();

    let p = Propagator::new(Scheme::Rk4, None);
    let traj = p.propagate(&initial, &mu, 0.0, PERIOD, 1e-3).unwrap();

    let e0 = total_energy(&initial, &mu).unwrap();
    let h0 = angular_momentum(&initial, &mu).unwrap();

    let last = traj.last_state().unwrap();
    let e1 = total_energy(last, &mu).unwrap();
    let h1 = angular_momentum(last, &mu).unwrap();

    assert!((e1 - e0).abs() < 1e-9 * e0.abs(), "energy drift: {e0} -> {e1}");
    for axis in 0..3 {
        assert!((h1[axis] - h0[axis]).abs() < 1e-9, "axis {axis} drift");
    }
}

#[test]
fn quarter_period_lands_at_ninety_degrees() {
    let bl = circular_pair();
    let initial = bl.initial_state();
    let mu = bl.mu_vec();

    let p = Propagator::new(Scheme::Rk4, None);
    let traj = p.propagate(&initial, &mu, 0.0, PERIOD / 4.0, 1e-3).unwrap();

    // Body "a" starts at (-1, 0, 0) moving in -y; after 90° it sits at
    // (0, -1, 0).
    let last = traj.last_state().unwrap();
    assert!((last[0] - 0.0).abs() < 1e-6);
    assert!((last[1] + 1.0).abs() < 1e-6);
    assert!(last[2].abs() < 1e-12);
}

#[test]
fn euler_is_visibly_worse_than_rk4() {
    let bl = circular_pair();
    let initial = bl.initial_state();
    let mu = bl.mu_vec();
    let dt = 1e-2;

    let drift = |scheme: Scheme| {
        let p = Propagator::new(scheme, None);
        let traj = p.propagate(&initial, &mu, 0.0, PERIOD, dt).unwrap();
        let last = traj.last_state().unwrap();
        last.iter()
            .zip(&initial)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0f64, f64::max)
    };

    let euler = drift(Scheme::Euler);
    let rk4 = drift(Scheme::Rk4);
    assert!(
        rk4 * 100.0 < euler,
        "expected RK4 ({rk4}) well under Euler ({euler})"
    );
}

#[test]
fn single_body_drifts_in_a_straight_line() {
    let bl = BodyList::new(vec![Body::new("probe", 1.0, [0.0; 3], [1.0, 2.0, 3.0])]);
    let initial = bl.initial_state();
    let mu = bl.mu_vec();

    let p = Propagator::new(Scheme::Rk4, None);
    let traj = p.propagate(&initial, &mu, 0.0, 2.0, 0.5).unwrap();

    let last = traj.last_state().unwrap();
    assert!((last[0] - 2.0).abs() < 1e-12);
    assert!((last[1] - 4.0).abs() < 1e-12);
    assert!((last[2] - 6.0).abs() < 1e-12);
    // Velocity unchanged: no one to pull on it.
    assert_eq!(&last[3..], &initial[3..]);
}
