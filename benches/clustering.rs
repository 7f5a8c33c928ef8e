use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use domcolor::{dominant_colors, points_from_pixels, DominantColorParams, Kmeans, PixelLayout};
use rand::prelude::*;

fn bench_kmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans");

    // A 100x100 RGBA buffer, the sample size a downscaled image yields.
    let mut rng = StdRng::seed_from_u64(42);
    let mut buf = vec![0u8; 100 * 100 * 4];
    rng.fill_bytes(&mut buf);
    let data = points_from_pixels(&buf, PixelLayout::Rgba).unwrap();

    group.bench_function("fit_n10000_k5", |b| {
        b.iter(|| {
            let model = Kmeans::new(5).with_seed(42);
            model.fit(black_box(&data)).unwrap();
        })
    });

    group.bench_function("dominant_colors_n10000_k4", |b| {
        let params = DominantColorParams {
            seed: Some(7),
            ..Default::default()
        };
        b.iter(|| dominant_colors(black_box(&data), &params).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_kmeans);
criterion_main!(benches);
