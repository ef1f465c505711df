//! Criterion benchmarks for the full propagation loop.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use orrery_bench::reference_cloud;
use orrery_propagator::{Propagator, Scheme};

/// Benchmark: 100 RK4 steps over a 64-body cloud.
fn bench_propagate_rk4(c: &mut Criterion) {
    let bl = reference_cloud(42);
    let state = bl.initial_state();
    let mu = bl.mu_vec();
    let p = Propagator::new(Scheme::Rk4, None);

    c.bench_function("propagate_rk4_64x100", |b| {
        b.iter(|| {
            let traj = p
                .propagate_steps(black_box(&state), black_box(&mu), 0.0, 100, 1e-3)
                .unwrap();
            black_box(traj.len());
        });
    });
}

/// Benchmark: the same run under Euler, one derivative evaluation per
/// step instead of four.
fn bench_propagate_euler(c: &mut Criterion) {
    let bl = reference_cloud(42);
    let state = bl.initial_state();
    let mu = bl.mu_vec();
    let p = Propagator::new(Scheme::Euler, None);

    c.bench_function("propagate_euler_64x100", |b| {
        b.iter(|| {
            let traj = p
                .propagate_steps(black_box(&state), black_box(&mu), 0.0, 100, 1e-3)
                .unwrap();
            black_box(traj.len());
        });
    });
}

criterion_group!(benches, bench_propagate_rk4, bench_propagate_euler);
criterion_main!(benches);
