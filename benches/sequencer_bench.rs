//! Criterion benchmarks for route sequencing.
//!
//! Uses synthetic routes scattered over a city-sized area so the cost per
//! call is dominated by the O(n) path evaluation inside each annealing step.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_routeseq::models::Stop;
use u_routeseq::sequencer::{nearest_neighbor, Sequencer, SequencerConfig};

fn city_route(n: usize) -> Vec<Stop> {
    (0..n)
        .map(|i| {
            let lat = 40.30 + ((i * 7919) % 1000) as f64 / 5000.0;
            let lon = -3.80 + ((i * 104_729) % 1000) as f64 / 5000.0;
            Stop::new(format!("s{i}"), lat, lon)
        })
        .collect()
}

fn bench_nearest_neighbor(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_neighbor");
    group.sample_size(20);

    for &n in &[10, 100, 500] {
        let stops = city_route(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &stops, |b, s| {
            b.iter(|| black_box(nearest_neighbor(black_box(s))))
        });
    }
    group.finish();
}

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");
    group.sample_size(10);

    let sequencer = Sequencer::new(SequencerConfig::default().with_seed(42))
        .expect("default schedule is valid");

    for &n in &[10, 50, 200] {
        let stops = city_route(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &stops, |b, s| {
            b.iter(|| {
                let result = sequencer.optimize(black_box(s.clone()));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nearest_neighbor, bench_optimize);
criterion_main!(benches);
