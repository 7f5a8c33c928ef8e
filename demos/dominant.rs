//! Dominant colors of a small synthetic "image".

use domcolor::{
    dominant_color_from_pixels, dominant_colors, points_from_pixels, DominantColorParams,
    PixelLayout, Rgb8,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 20x20 BGRA buffer: mostly sky blue, a band of grass green, a few white pixels.
    let mut buf = Vec::with_capacity(20 * 20 * 4);
    for y in 0..20 {
        for x in 0..20 {
            let (r, g, b) = match (x, y) {
                (_, 14..) => (60, 140, 50),
                (3..=5, 2..=3) => (250, 250, 250),
                _ => (120, 180, 230),
            };
            buf.extend_from_slice(&[b, g, r, 255]);
        }
    }

    let params = DominantColorParams {
        k: 3,
        seed: Some(42),
        ..Default::default()
    };

    let points = points_from_pixels(&buf, PixelLayout::Bgra).unwrap();
    let swatches = dominant_colors(&points, &params).unwrap();

    println!("=== Palette (k={}) ===", params.k);
    for s in &swatches {
        let c: Rgb8 = s.to_color();
        println!("  {}  {:5.1}%  ({} px)", c.to_hex(), s.share * 100.0, s.population);
    }

    let dominant: Rgb8 = dominant_color_from_pixels(&buf, PixelLayout::Bgra, &params);
    println!("\nDominant: {}", dominant.to_hex());

    // Too many clusters for a 3-color image: falls back to neutral grey.
    let greedy = DominantColorParams { k: 8, ..params };
    let fallback: Rgb8 = dominant_color_from_pixels(&buf, PixelLayout::Bgra, &greedy);
    println!("k=8 fallback: {}", fallback.to_hex());
}
