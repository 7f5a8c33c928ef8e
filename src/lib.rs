//! Dominant color estimation.
//!
//! `domcolor` clusters color samples in normalized RGB space with a bounded
//! k-means whose centers snap to real samples, then ranks the clusters by
//! population. Decoding and resizing images is left to the caller: hand in
//! [`Point`]s (or a raw pixel buffer) and get back ranked [`Swatch`]es.
//!
//! - [`cluster`]: the k-means core ([`Kmeans`], [`Cluster`]).
//! - [`color`]: the [`ColorSource`] / [`ColorSink`] boundary and 8-bit adapters.
//! - [`pixels`]: raw buffer extraction for common channel orders.
//! - [`palette`]: ranking and single-color helpers with a neutral fallback.
//!
//! ```rust
//! use domcolor::{dominant_color, DominantColorParams, Point, Rgb8};
//!
//! let mut samples = vec![Point::from_color(&Rgb8::new(200, 40, 40)); 10];
//! samples.push(Point::from_color(&Rgb8::new(20, 20, 200)));
//!
//! let params = DominantColorParams { k: 2, seed: Some(1), ..Default::default() };
//! let c: Rgb8 = dominant_color(&samples, &params);
//! assert_eq!(c, Rgb8::new(200, 40, 40));
//! ```

#![forbid(unsafe_code)]

pub mod cluster;
pub mod color;
pub mod error;
pub mod palette;
pub mod pixels;
pub mod point;

pub use cluster::{cluster, Cluster, Clustering, Kmeans, KmeansFit};
pub use color::{ColorSink, ColorSource, Rgb8, Rgba};
pub use error::{Error, Result};
pub use palette::{
    dominant_color, dominant_color_from_pixels, dominant_colors, rank_by_population,
    DominantColorParams, Swatch,
};
pub use pixels::{points_from_pixels, PixelLayout};
pub use point::Point;
