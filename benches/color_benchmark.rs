#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for RGB <-> HSL conversion and normalization.

use biome_tint::color::{hsl_to_rgb, rgb_to_hsl, Rgba};
use biome_tint::normalize::normalize_color;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_colors() -> Vec<Rgba> {
    (0..4096u32)
        .map(|i| {
            Rgba::rgb(
                f64::from((i * 37) % 256),
                f64::from((i * 91) % 256),
                f64::from((i * 13) % 256),
            )
        })
        .collect()
}

fn conversion_benchmark(c: &mut Criterion) {
    let colors = sample_colors();
    let mut group = c.benchmark_group("conversion");

    group.bench_function("rgb_to_hsl", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(rgb_to_hsl(color.r, color.g, color.b, None));
            }
        });
    });

    let hsl: Vec<_> = colors.iter().map(|c| c.to_hsla()).collect();
    group.bench_function("hsl_to_rgb", |b| {
        b.iter(|| {
            for color in &hsl {
                black_box(hsl_to_rgb(color.h, color.s, color.l, Some(color.a)));
            }
        });
    });

    group.finish();
}

fn normalize_benchmark(c: &mut Criterion) {
    let colors = sample_colors();

    c.bench_function("normalize_color", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(normalize_color(black_box(*color)));
            }
        });
    });
}

criterion_group!(benches, conversion_benchmark, normalize_benchmark);
criterion_main!(benches);
