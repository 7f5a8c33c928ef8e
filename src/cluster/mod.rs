//! Clustering of color samples.
//!
//! ## K-means with medoid snapping
//!
//! The classic loop: assign each point to the nearest center, then move each
//! center. Here the center does not move to the mean of its members but to the
//! member *closest* to that mean, so centers are always real samples.
//!
//! **Objective** (approximately minimized):
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - c_k||²,   c_k ∈ C_k
//! ```
//!
//! **Bounds**: at most `max_iter` rounds (10 by default), early stop when no
//! center moves more than `tolerance` (0.001, squared distance).
//!
//! ## Usage
//!
//! ```rust
//! use domcolor::cluster::{Clustering, Kmeans};
//! use domcolor::Point;
//!
//! let data = vec![
//!     Point::new(0.0, 0.0, 0.0),
//!     Point::new(0.0, 0.0, 0.0),
//!     Point::new(1.0, 1.0, 1.0),
//! ];
//!
//! let labels = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//! ```

mod kmeans;
mod traits;
mod util;

pub use kmeans::{cluster, Cluster, Kmeans, KmeansFit, DEFAULT_MAX_ITER, DEFAULT_TOLERANCE};
pub use traits::Clustering;
