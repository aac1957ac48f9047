//! Criterion benchmarks for the monotone triangulation pipeline.
//! Focus sizes: n in {8, 32, 128, 512, 2048} vertices (random star polygons).
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p monotri

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use monotri::decomp::{classify, partition, triangulate};
use monotri::geom2::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use monotri::Polygon;

fn star(n: usize, seed: u64) -> Polygon {
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(n),
        ..StarCfg::default()
    };
    // Retry the next index if a sample happens to be rejected.
    (0..)
        .find_map(|index| draw_star_polygon(cfg, ReplayToken { seed, index }))
        .expect("star sampler produced a valid polygon")
}

fn bench_triangulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("monotri");
    for &n in &[8usize, 32, 128, 512, 2048] {
        group.bench_with_input(BenchmarkId::new("triangulate", n), &n, |b, &n| {
            b.iter_batched(
                || star(n, 43),
                |poly| {
                    let _tris = triangulate(&poly).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("partition", n), &n, |b, &n| {
            let poly = star(n, 44);
            let cls = classify(&poly);
            b.iter(|| {
                let _diags = partition(&poly, &cls).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_triangulate);
criterion_main!(benches);
