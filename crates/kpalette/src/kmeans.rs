use crate::types::{Centroid, ColorVector};
use snafu::prelude::*;

pub mod lloyds;

// Fixed-iteration Lloyd's algorithm, seeded with the first k samples.
//
// Known limitations:
// - Seeding depends on sample order. Callers wanting unbiased seeds must shuffle first.
// - A cluster that stays empty for every iteration keeps its seed value.

#[derive(Debug, Snafu, PartialEq)]
#[non_exhaustive]
pub enum ClusterError {
    #[snafu(display("sample set is empty"))]
    EmptySamples,

    #[snafu(display("number of clusters must be positive"))]
    ZeroClusters,

    #[snafu(display("number of clusters ({k}) exceeds the number of samples ({samples})"))]
    TooManyClusters { k: usize, samples: usize },

    #[snafu(display("sample {index} has a non-finite component"))]
    NonFiniteSample { index: usize },
}

/// Cluster `samples` into `k` colors with exactly `iterations` assign/update passes.
///
/// The returned centroids are in cluster index order `0..k`. With `iterations == 0`
/// they are the first `k` samples, verbatim.
pub fn run(
    samples: &[ColorVector],
    k: usize,
    iterations: usize,
) -> Result<Vec<Centroid>, ClusterError> {
    ensure!(!samples.is_empty(), EmptySamplesSnafu);
    ensure!(k > 0, ZeroClustersSnafu);
    ensure!(
        k <= samples.len(),
        TooManyClustersSnafu {
            k,
            samples: samples.len()
        }
    );
    if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
        return NonFiniteSampleSnafu { index }.fail();
    }

    tracing::debug!(samples = samples.len(), k, iterations, "running k-means");

    let mut centroids = samples[..k].to_vec();
    let frozen = lloyds::lloyds_loop(samples, &mut centroids, iterations);

    tracing::debug!(frozen, "k-means finished");

    Ok(centroids
        .into_iter()
        .enumerate()
        .map(|(index, color)| Centroid { index, color })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn colors(centroids: &[Centroid]) -> Vec<ColorVector> {
        centroids.iter().map(|c| c.color).collect()
    }

    fn random_samples(n: usize, seed: u64) -> Vec<ColorVector> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        (0..n)
            .map(|_| {
                ColorVector::new(
                    rng.random_range(0.0..255.0),
                    rng.random_range(0.0..255.0),
                    rng.random_range(0.0..255.0),
                )
            })
            .collect()
    }

    #[test]
    fn zero_iterations_returns_seeds() {
        let samples = random_samples(50, 1);
        let result = run(&samples, 5, 0).unwrap();
        assert_eq!(colors(&result), samples[..5].to_vec());
        let indices: Vec<usize> = result.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn single_cluster_is_global_average() {
        let samples = random_samples(200, 2);
        let expected = ColorVector::average(&samples).unwrap();
        for iterations in [1, 2, 7] {
            let result = run(&samples, 1, iterations).unwrap();
            assert_eq!(colors(&result), vec![expected]);
        }
    }

    #[test]
    fn repeated_single_color() {
        let samples = vec![ColorVector::new(10.0, 20.0, 30.0); 5];
        let result = run(&samples, 1, 3).unwrap();
        assert_eq!(colors(&result), vec![ColorVector::new(10.0, 20.0, 30.0)]);
    }

    #[test]
    fn black_and_white() {
        let black = ColorVector::new(0.0, 0.0, 0.0);
        let white = ColorVector::new(255.0, 255.0, 255.0);
        let samples = vec![black, black, white, white];
        let result = run(&samples, 2, 5).unwrap();
        // Both seeds are black, so the first pass sends everything to cluster 0 (ties go to
        // the lower index) and cluster 1 stays frozen at black. The second pass splits them.
        assert_eq!(colors(&result), vec![white, black]);

        let first_pass = run(&samples, 2, 1).unwrap();
        assert_eq!(
            colors(&first_pass),
            vec![ColorVector::new(127.5, 127.5, 127.5), black]
        );

        let samples = vec![black, white, black, white];
        let result = run(&samples, 2, 5).unwrap();
        assert_eq!(colors(&result), vec![black, white]);
    }

    #[test]
    fn deterministic() {
        let samples = random_samples(1000, 3);
        let a = run(&samples, 5, 10).unwrap();
        let b = run(&samples, 5, 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn k_equals_sample_count() {
        let samples = vec![
            ColorVector::new(0.0, 0.0, 0.0),
            ColorVector::new(100.0, 0.0, 0.0),
            ColorVector::new(0.0, 100.0, 0.0),
            ColorVector::new(0.0, 0.0, 100.0),
        ];
        let result = run(&samples, 4, 10).unwrap();
        assert_eq!(colors(&result), samples);
    }

    #[test]
    fn always_returns_k_centroids() {
        let samples = random_samples(300, 4);
        for k in 1..=8 {
            let result = run(&samples, k, 10).unwrap();
            assert_eq!(result.len(), k);
        }
    }

    #[test]
    fn large_finite_components() {
        let samples = vec![
            ColorVector::new(-2e19, 0.0, 0.0),
            ColorVector::new(0.0, 0.0, 0.0),
            ColorVector::new(2e19, 0.0, 0.0),
        ];
        let result = run(&samples, 2, 1).unwrap();
        assert_eq!(
            colors(&result),
            vec![
                ColorVector::new(-2e19, 0.0, 0.0),
                ColorVector::new(1e19, 0.0, 0.0)
            ]
        );
    }

    #[test]
    fn empty_samples() {
        assert_eq!(run(&[], 1, 10), Err(ClusterError::EmptySamples));
    }

    #[test]
    fn zero_clusters() {
        let samples = random_samples(10, 5);
        assert_eq!(run(&samples, 0, 10), Err(ClusterError::ZeroClusters));
    }

    #[test]
    fn too_many_clusters() {
        let samples = random_samples(3, 6);
        let err = run(&samples, 4, 10).unwrap_err();
        assert_eq!(err, ClusterError::TooManyClusters { k: 4, samples: 3 });
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn non_finite_sample() {
        let mut samples = random_samples(10, 7);
        samples[6].g = f32::NAN;
        assert_eq!(
            run(&samples, 2, 10),
            Err(ClusterError::NonFiniteSample { index: 6 })
        );
    }
}
