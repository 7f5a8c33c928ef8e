use crate::error::Result;
use crate::point::Point;

/// Common interface for hard clustering of color samples (one label per point).
pub trait Clustering {
    /// Fit the model and return one cluster label per input point.
    fn fit_predict(&self, points: &[Point]) -> Result<Vec<usize>>;

    /// The configured number of clusters.
    fn n_clusters(&self) -> usize;
}
