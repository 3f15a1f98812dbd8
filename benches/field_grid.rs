use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use charge_field::fields::{build_grid, compute_field, Charge, FieldConfig};

fn ring_of_charges(count: usize) -> Vec<Charge> {
    (0..count)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / count as f64;
            let q = if i % 2 == 0 { 1.0 } else { -1.0 };
            Charge::new(q, 2.0 * theta.cos(), 2.0 * theta.sin())
        })
        .collect()
}

fn bench_build_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_grid");
    for n in [100_usize, 300, 600] {
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| build_grid(-5.0, 5.0, -5.0, 5.0, n))
        });
    }
    group.finish();
}

fn bench_compute_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_field");
    let grid = build_grid(-5.0, 5.0, -5.0, 5.0, 300).expect("valid grid");
    let config = FieldConfig::default();
    for count in [1_usize, 4, 16] {
        group.bench_function(BenchmarkId::new("charges", count), |b| {
            b.iter_batched(
                || ring_of_charges(count),
                |charges| {
                    let _ = compute_field(&charges, &grid, &config);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_grid, bench_compute_field);
criterion_main!(benches);
