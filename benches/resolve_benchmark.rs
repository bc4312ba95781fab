#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for the dominant-category vote and full resolution.

use std::collections::HashMap;

use biome_tint::color::Rgba;
use biome_tint::resolver::resolve;
use biome_tint::vote::{dominant, CategorySample};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const TILES: [&str; 6] = ["grass-1", "grass-2", "dirt-1", "sand-1", "water", "deepwater"];

fn samples(count: usize) -> Vec<CategorySample<&'static str>> {
    (0..count)
        .map(|i| {
            let sample = CategorySample::new(TILES[(i * 7) % TILES.len()]);
            if i % 5 == 0 {
                sample.with_hidden(TILES[i % TILES.len()])
            } else {
                sample
            }
        })
        .collect()
}

fn vote_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dominant");

    // Typical sampling radii: 3x3, 11x11, 33x33 tiles
    for count in [9, 121, 1089] {
        let input = samples(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
            b.iter(|| dominant(black_box(input)));
        });
    }

    group.finish();
}

fn resolve_benchmark(c: &mut Criterion) {
    let colors: HashMap<&str, Rgba> = TILES
        .iter()
        .enumerate()
        .map(|(i, &name)| (name, Rgba::rgb(40.0 * i as f64, 120.0, 200.0 - 30.0 * i as f64)))
        .collect();
    let input = samples(121);

    c.bench_function("resolve_121", |b| {
        b.iter(|| resolve(black_box(&input), &colors, || "grass-1").expect("known category"));
    });
}

criterion_group!(benches, vote_benchmark, resolve_benchmark);
criterion_main!(benches);
