//! Criterion benchmarks for cablenet.
//!
//! Uses synthetic grid layouts so the numbers measure the validator and
//! the evolutionary loop, not any particular real site.

use cablenet::geometry::Point;
use cablenet::problem::random_topology;
use cablenet::random::create_rng;
use cablenet::site::Site;
use cablenet::solver::{evaluate, run_search, SearchParams};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Square grid of turbines with the substation in the middle.
fn grid_site(side: usize) -> Site {
    let mut xs = Vec::with_capacity(side * side);
    let mut ys = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            xs.push(col as f64 * 100.0);
            ys.push(row as f64 * 100.0);
        }
    }
    let center = (side - 1) as f64 * 50.0;
    Site::new(
        &xs,
        &ys,
        Point::new(center + 13.0, center + 7.0),
        &[206.0, 287.0, 406.0],
        &[3, 5, 7],
    )
    .expect("grid site is well-formed")
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for side in [3usize, 5, 7] {
        let site = grid_site(side);
        let mut rng = create_rng(42);
        let topologies: Vec<_> = (0..64)
            .map(|_| random_topology(site.turbine_count(), site.tier_count(), 0.5, 0.5, &mut rng))
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(side * side),
            &topologies,
            |b, topologies| {
                let mut i = 0;
                b.iter(|| {
                    let t = &topologies[i % topologies.len()];
                    i += 1;
                    black_box(evaluate(t, &site).expect("generated tiers are in range"))
                });
            },
        );
    }
    group.finish();
}

fn bench_run_search(c: &mut Criterion) {
    let site = grid_site(3);
    let params = SearchParams {
        population_size: 30,
        generations: 20,
        parallel: false,
        ..SearchParams::default()
    };

    c.bench_function("run_search/9_turbines", |b| {
        b.iter(|| {
            let mut rng = create_rng(42);
            black_box(run_search(&site, &params, &mut rng).expect("params are valid"))
        });
    });
}

criterion_group!(benches, bench_evaluate, bench_run_search);
criterion_main!(benches);
