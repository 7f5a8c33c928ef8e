use domcolor::cluster::{Clustering, Kmeans};
use domcolor::{Error, Point};
use proptest::prelude::*;

// 8-bit quantized channels, like samples taken from a real image.
fn sample() -> impl Strategy<Value = Point> {
    (0u8..=255, 0u8..=255, 0u8..=255).prop_map(|(r, g, b)| Point::from_color(&[r, g, b]))
}

fn distinct(points: &[Point]) -> usize {
    let mut seen: Vec<Point> = Vec::new();
    for p in points {
        if !seen.contains(p) {
            seen.push(*p);
        }
    }
    seen.len()
}

fn sort_key(p: &Point) -> [u32; 3] {
    [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]
}

proptest! {
    #[test]
    fn prop_kmeans_partitions_input(
        data in prop::collection::vec(sample(), 1..40),
        k in 1usize..6,
        seed in any::<u64>(),
    ) {
        prop_assume!(k <= distinct(&data));

        let fit = Kmeans::new(k).with_seed(seed).fit(&data).unwrap();
        prop_assert_eq!(fit.clusters.len(), k);
        prop_assert_eq!(fit.labels.len(), data.len());

        let mut members: Vec<Point> = fit
            .clusters
            .iter()
            .flat_map(|c| c.members().iter().copied())
            .collect();
        let mut input = data.clone();
        members.sort_by_key(sort_key);
        input.sort_by_key(sort_key);
        prop_assert_eq!(members, input);

        for (i, p) in data.iter().enumerate() {
            prop_assert!(fit.clusters[fit.labels[i]].members().contains(p));
        }
    }

    #[test]
    fn prop_centers_are_input_points(
        data in prop::collection::vec(sample(), 1..40),
        k in 1usize..6,
        seed in any::<u64>(),
    ) {
        prop_assume!(k <= distinct(&data));

        let clusters = Kmeans::new(k).with_seed(seed).cluster(&data).unwrap();
        for c in &clusters {
            prop_assert!(data.contains(&c.center()));
        }
        for (i, a) in clusters.iter().enumerate() {
            for b in &clusters[i + 1..] {
                prop_assert!(a.is_empty() || b.is_empty() || a.center() != b.center());
            }
        }
    }

    #[test]
    fn prop_seeded_runs_are_deterministic(
        data in prop::collection::vec(sample(), 1..40),
        k in 1usize..4,
        seed in any::<u64>(),
    ) {
        prop_assume!(k <= distinct(&data));

        let model = Kmeans::new(k).with_seed(seed);
        prop_assert_eq!(model.fit_predict(&data).unwrap(), model.fit_predict(&data).unwrap());
    }

    #[test]
    fn prop_single_cluster_takes_everything(
        data in prop::collection::vec(sample(), 1..40),
    ) {
        let clusters = Kmeans::new(1).cluster(&data).unwrap();
        prop_assert_eq!(clusters.len(), 1);
        prop_assert_eq!(clusters[0].len(), data.len());
    }

    #[test]
    fn prop_too_many_clusters_is_degenerate(
        data in prop::collection::vec(sample(), 1..10),
    ) {
        let d = distinct(&data);
        let err = Kmeans::new(d + 1).cluster(&data).unwrap_err();
        prop_assert_eq!(err, Error::DegenerateInput { requested: d + 1, distinct: d });
    }
}
