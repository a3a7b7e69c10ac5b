use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use orrery::kepler::{solve_kepler_equation, KeplerSolver};

const SAMPLES: usize = 10_000;

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

fn random_cases(rng: &mut StdRng, ecc: std::ops::Range<f64>) -> Vec<(f64, f64)> {
    (0..SAMPLES)
        .map(|_| (rand_angle(rng), rng.random_range(ecc.clone())))
        .collect()
}

/// Planet-like regime: e ∈ [0.0, 0.25)
fn bench_planetary(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

    c.bench_function("solve_kepler_equation/planetary_e<0.25", |b| {
        b.iter_batched(
            // Pre-generate inputs to keep the RNG out of the timed section
            || random_cases(&mut rng, 0.0..0.25),
            |cases| {
                for (mean_anomaly, e) in cases {
                    black_box(solve_kepler_equation(black_box(mean_anomaly), black_box(e)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Comet-like regime: e ∈ [0.7, 0.99)
fn bench_high_e(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);

    c.bench_function("solve_kepler_equation/high_e_0.7..0.99", |b| {
        b.iter_batched(
            || random_cases(&mut rng, 0.7..0.99),
            |cases| {
                for (mean_anomaly, e) in cases {
                    black_box(solve_kepler_equation(black_box(mean_anomaly), black_box(e)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Near periapsis at e = 0.99, where the plain Newton iteration overshoots.
fn bench_fixed_stress(c: &mut Criterion) {
    let solver = KeplerSolver::default();

    c.bench_function("solve_kepler_equation/fixed_stress_case", |b| {
        b.iter(|| black_box(solver.solve(black_box(0.1414), black_box(0.99))))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_planetary, bench_high_e, bench_fixed_stress
);
criterion_main!(benches);
