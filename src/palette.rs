//! Ranking clusters into dominant colors.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cluster::{Cluster, Kmeans, DEFAULT_MAX_ITER, DEFAULT_TOLERANCE};
use crate::color::ColorSink;
use crate::error::Result;
use crate::pixels::{points_from_pixels, PixelLayout};
use crate::point::Point;

/// Settings for dominant color extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DominantColorParams {
    /// Number of clusters.
    pub k: usize,
    /// Cap on assignment/update rounds.
    pub max_iter: usize,
    /// Convergence threshold on squared center movement.
    pub tolerance: f32,
    /// Optional RNG seed for reproducibility.
    pub seed: Option<u64>,
    /// Color returned when no dominant color can be determined.
    pub fallback: Point,
}

impl Default for DominantColorParams {
    fn default() -> Self {
        Self {
            k: 4,
            max_iter: DEFAULT_MAX_ITER,
            tolerance: DEFAULT_TOLERANCE,
            seed: None,
            fallback: Point::new(0.5, 0.5, 0.5),
        }
    }
}

impl DominantColorParams {
    /// The clusterer these settings describe.
    pub fn kmeans(&self) -> Kmeans {
        let model = Kmeans::new(self.k)
            .with_max_iter(self.max_iter)
            .with_tolerance(self.tolerance);
        match self.seed {
            Some(seed) => model.with_seed(seed),
            None => model,
        }
    }
}

/// A cluster center with its share of the samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    /// Cluster center.
    pub center: Point,
    /// Number of samples in the cluster.
    pub population: usize,
    /// `population` over the total sample count, in `[0, 1]`.
    pub share: f32,
}

impl Swatch {
    /// The center as a platform color.
    pub fn to_color<C: ColorSink>(&self) -> C {
        self.center.to_color()
    }
}

/// Order clusters by descending population. Equal populations keep their order.
pub fn rank_by_population(clusters: Vec<Cluster>) -> Vec<Swatch> {
    let total: usize = clusters.iter().map(Cluster::len).sum();
    let mut swatches: Vec<Swatch> = clusters
        .iter()
        .map(|c| Swatch {
            center: c.center(),
            population: c.len(),
            share: if total == 0 {
                0.0
            } else {
                c.len() as f32 / total as f32
            },
        })
        .collect();
    swatches.sort_by(|a, b| b.population.cmp(&a.population));
    swatches
}

/// Cluster `points` and rank the centers, most common first.
pub fn dominant_colors(points: &[Point], params: &DominantColorParams) -> Result<Vec<Swatch>> {
    params.kmeans().cluster(points).map(rank_by_population)
}

/// The most common color of `points`, or `params.fallback` if none can be found.
pub fn dominant_color<C: ColorSink>(points: &[Point], params: &DominantColorParams) -> C {
    let best = dominant_colors(points, params)
        .map(|swatches| swatches.first().map(|s| s.center).unwrap_or(params.fallback));
    resolve(best, params)
}

/// Like [`dominant_color`], reading samples from a raw pixel buffer.
pub fn dominant_color_from_pixels<C: ColorSink>(
    buf: &[u8],
    layout: PixelLayout,
    params: &DominantColorParams,
) -> C {
    let best = points_from_pixels(buf, layout).and_then(|points| {
        dominant_colors(&points, params)
            .map(|swatches| swatches.first().map(|s| s.center).unwrap_or(params.fallback))
    });
    resolve(best, params)
}

fn resolve<C: ColorSink>(best: Result<Point>, params: &DominantColorParams) -> C {
    match best {
        Ok(center) => center.to_color(),
        Err(err) => {
            debug!(error = %err, "no dominant color, using fallback");
            params.fallback.to_color()
        }
    }
}
