use std::collections::HashSet;

use crate::point::Point;

/// Hash key matching `Point`'s exact equality for non-NaN values.
///
/// `-0.0` and `0.0` compare equal, so both map to the same bits.
#[inline]
fn exact_key(p: &Point) -> [u32; 3] {
    let bits = |v: f32| if v == 0.0 { 0u32 } else { v.to_bits() };
    [bits(p.x), bits(p.y), bits(p.z)]
}

/// Number of distinct point values under exact comparison.
pub(crate) fn count_distinct(points: &[Point]) -> usize {
    points
        .iter()
        .map(exact_key)
        .collect::<HashSet<_>>()
        .len()
}

/// Index of the first entry in `candidates` closest to `target`.
///
/// Returns 0 for an empty slice; callers only pass non-empty ones.
#[inline]
pub(crate) fn nearest(candidates: &[Point], target: &Point) -> usize {
    let mut best = 0;
    let mut best_dist = f32::INFINITY;
    for (i, c) in candidates.iter().enumerate() {
        let d = c.distance_squared(target);
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

/// Arithmetic mean of a non-empty slice.
#[inline]
pub(crate) fn mean(points: &[Point]) -> Point {
    debug_assert!(!points.is_empty());
    points.iter().sum::<Point>() / points.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_counts_exact_values() {
        let pts = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(-0.0, 0.0, 0.0),
            Point::new(0.5, 0.5, 0.5),
            Point::new(0.5, 0.5, 0.5),
            Point::new(0.5, 0.5, 0.500_001),
        ];
        assert_eq!(count_distinct(&pts), 3);
        assert_eq!(count_distinct(&[]), 0);
    }

    #[test]
    fn nearest_prefers_first_on_ties() {
        let centers = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 0.0),
        ];
        assert_eq!(nearest(&centers, &Point::new(0.1, 0.0, 0.0)), 0);
        assert_eq!(nearest(&centers, &Point::new(0.5, 0.0, 0.0)), 0);
        assert_eq!(nearest(&centers, &Point::new(0.9, 0.0, 0.0)), 1);
    }

    #[test]
    fn mean_of_points() {
        let pts = [Point::new(0.0, 0.5, 1.0), Point::new(1.0, 0.5, 0.0)];
        assert_eq!(mean(&pts), Point::new(0.5, 0.5, 0.5));
    }
}
