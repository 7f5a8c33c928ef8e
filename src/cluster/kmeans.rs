//! K-means with medoid-snapped centers.
//!
//! # The Algorithm
//!
//! 1. **Seeding**: draw `k` points uniformly at random, never reusing a value
//!    that is already a seed. This is plain random seeding, not k-means++.
//!
//! 2. **Assignment**: every point joins the cluster whose center is nearest in
//!    squared Euclidean distance. Ties go to the earlier cluster.
//!
//! 3. **Update**: for each non-empty cluster, compute the mean of its members and
//!    move the center to the *member* closest to that mean. Empty clusters keep
//!    their center.
//!
//! 4. Repeat 2-3 until every center moves by at most `tolerance` (squared
//!    distance) or `max_iter` rounds have run.
//!
//! Snapping to a member keeps every center inside the sampled gamut: a dominant
//! color is always a color that actually occurs in the input.
//!
//! ## Complexity
//!
//! - **Time**: O(max_iter · k · n).
//! - **Space**: O(n) for labels and members.
//!
//! ## Failure Modes
//!
//! Seeding needs `k` distinct values. Empty input and inputs with fewer than `k`
//! distinct values are rejected before any random draw.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::traits::Clustering;
use super::util;
use crate::error::{Error, Result};
use crate::point::Point;

/// Default cap on assignment/update rounds.
pub const DEFAULT_MAX_ITER: usize = 10;

/// Default convergence threshold on squared center movement.
pub const DEFAULT_TOLERANCE: f32 = 0.001;

/// One cluster of color samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    center: Point,
    members: Vec<Point>,
}

impl Cluster {
    fn seeded(center: Point) -> Self {
        Self {
            center,
            members: Vec::new(),
        }
    }

    /// The representative point. Always one of the input points.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Points assigned in the final assignment pass.
    pub fn members(&self) -> &[Point] {
        &self.members
    }

    /// Take ownership of the member points.
    pub fn into_members(self) -> Vec<Point> {
        self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether no point was assigned to this cluster.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Result of a k-means run.
#[derive(Debug, Clone)]
pub struct KmeansFit {
    /// Final clusters, in seeding order.
    pub clusters: Vec<Cluster>,
    /// `labels[i]` is the index into `clusters` of input point `i`.
    pub labels: Vec<usize>,
    /// Number of assignment/update rounds run.
    pub iterations: usize,
    /// Whether the run stopped because centers settled (as opposed to the cap).
    pub converged: bool,
}

/// K-means clusterer over color samples.
#[derive(Debug, Clone)]
pub struct Kmeans {
    k: usize,
    max_iter: usize,
    tolerance: f32,
    seed: Option<u64>,
}

impl Kmeans {
    /// Create a clusterer for `k` clusters with default settings.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    /// Set the number of clusters.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the maximum number of rounds.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the convergence threshold (squared distance).
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Fix the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cluster `points` and return the clusters.
    pub fn cluster(&self, points: &[Point]) -> Result<Vec<Cluster>> {
        self.fit(points).map(|fit| fit.clusters)
    }

    /// Cluster `points`, keeping labels and run statistics.
    ///
    /// Uses the configured seed if any, otherwise the thread-local generator.
    pub fn fit(&self, points: &[Point]) -> Result<KmeansFit> {
        match self.seed {
            Some(seed) => self.fit_with_rng(points, &mut StdRng::seed_from_u64(seed)),
            None => self.fit_with_rng(points, &mut rand::rng()),
        }
    }

    /// Cluster `points` drawing seeds from `rng`. The configured seed is ignored.
    pub fn fit_with_rng<R: Rng + ?Sized>(
        &self,
        points: &[Point],
        rng: &mut R,
    ) -> Result<KmeansFit> {
        self.validate(points)?;

        let mut clusters: Vec<Cluster> = seed_centers(points, self.k, rng)
            .into_iter()
            .map(Cluster::seeded)
            .collect();
        let mut labels = vec![0usize; points.len()];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iter {
            iterations += 1;
            assign(points, &mut clusters, &mut labels);
            let shifts = update_centers(&mut clusters);

            let max_shift = shifts.iter().copied().fold(0.0f32, f32::max);
            trace!(iteration = iterations, max_shift, "kmeans round");

            if shifts.iter().all(|&s| s <= self.tolerance) {
                converged = true;
                break;
            }
        }

        debug!(
            points = points.len(),
            k = self.k,
            iterations,
            converged,
            "kmeans finished"
        );

        Ok(KmeansFit {
            clusters,
            labels,
            iterations,
            converged,
        })
    }

    fn validate(&self, points: &[Point]) -> Result<()> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }

        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }

        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }

        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(Error::InvalidParameter {
                name: "tolerance",
                message: "must be finite and non-negative",
            });
        }

        let distinct = util::count_distinct(points);
        if distinct < self.k {
            return Err(Error::DegenerateInput {
                requested: self.k,
                distinct,
            });
        }

        Ok(())
    }
}

impl Default for Kmeans {
    fn default() -> Self {
        Self {
            k: 1,
            max_iter: DEFAULT_MAX_ITER,
            tolerance: DEFAULT_TOLERANCE,
            seed: None,
        }
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, points: &[Point]) -> Result<Vec<usize>> {
        self.fit(points).map(|fit| fit.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// Cluster `points` into `k` clusters with default settings and fresh randomness.
pub fn cluster(points: &[Point], k: usize) -> Result<Vec<Cluster>> {
    Kmeans::new(k).cluster(points)
}

/// Pick `k` mutually distinct seed centers.
///
/// Draws uniformly among the points whose value is not yet a seed. This is the
/// distribution of rejection sampling over the whole input, without the retries.
/// Requires at least `k` distinct values in `points`.
fn seed_centers<R: Rng + ?Sized>(points: &[Point], k: usize, rng: &mut R) -> Vec<Point> {
    let mut candidates: Vec<usize> = (0..points.len()).collect();
    let mut seeds = Vec::with_capacity(k);

    while seeds.len() < k {
        debug_assert!(!candidates.is_empty());
        let pick = points[candidates[rng.random_range(0..candidates.len())]];
        candidates.retain(|&i| points[i] != pick);
        seeds.push(pick);
    }

    seeds
}

/// Rebuild every cluster's member list from scratch.
fn assign(points: &[Point], clusters: &mut [Cluster], labels: &mut [usize]) {
    let centers: Vec<Point> = clusters.iter().map(|c| c.center).collect();
    assign_labels(points, &centers, labels);

    for c in clusters.iter_mut() {
        c.members.clear();
    }
    for (p, &label) in points.iter().zip(labels.iter()) {
        clusters[label].members.push(*p);
    }
}

#[cfg(not(feature = "parallel"))]
fn assign_labels(points: &[Point], centers: &[Point], labels: &mut [usize]) {
    for (label, p) in labels.iter_mut().zip(points) {
        *label = util::nearest(centers, p);
    }
}

// Each worker writes only its own slice of labels; members are grouped afterwards
// on the calling thread.
#[cfg(feature = "parallel")]
fn assign_labels(points: &[Point], centers: &[Point], labels: &mut [usize]) {
    use rayon::prelude::*;

    labels
        .par_iter_mut()
        .zip(points.par_iter())
        .for_each(|(label, p)| *label = util::nearest(centers, p));
}

/// Snap each non-empty cluster's center to the member nearest its mean.
///
/// Returns the squared movement of every center.
fn update_centers(clusters: &mut [Cluster]) -> Vec<f32> {
    clusters
        .iter_mut()
        .map(|c| {
            if c.members.is_empty() {
                return 0.0;
            }
            let ideal = util::mean(&c.members);
            let snapped = c.members[util::nearest(&c.members, &ideal)];
            let shift = c.center.distance_squared(&snapped);
            c.center = snapped;
            shift
        })
        .collect()
}
