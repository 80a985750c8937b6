use crate::types::{ColorSum, ColorVector};

/// Assign every sample to its nearest centroid.
///
/// Centroids are scanned in index order and only a strictly smaller distance replaces
/// the current best, so ties go to the lowest index.
#[inline]
pub fn assign_points(
    samples: &[ColorVector],
    centroids: &[ColorVector],
    assignments: &mut [usize],
) {
    debug_assert_eq!(samples.len(), assignments.len());

    for (sample, assignment) in samples.iter().copied().zip(assignments.iter_mut()) {
        let mut min = f64::INFINITY;
        let mut min_idx = 0;
        for (j, centroid) in centroids.iter().copied().enumerate() {
            let d = sample.squared_distance(centroid);
            if d < min {
                min = d;
                min_idx = j;
            }
        }

        *assignment = min_idx;
    }
}

/// Move each centroid to the mean of its assigned samples. Returns the per-cluster counts;
/// a cluster with a zero count keeps its previous centroid.
#[inline]
pub fn update_centroids(
    samples: &[ColorVector],
    assignments: &[usize],
    centroids: &mut [ColorVector],
) -> Vec<u32> {
    let mut sums = vec![ColorSum::default(); centroids.len()];

    for (sample, &assigned_c) in samples.iter().copied().zip(assignments) {
        sums[assigned_c].push(sample);
    }

    for (centroid, sum) in centroids.iter_mut().zip(&sums) {
        // Empty cluster: keep the previous value
        if let Some(mean) = sum.mean() {
            *centroid = mean;
        }
    }

    sums.iter().map(ColorSum::count).collect()
}

/// Run exactly `iterations` assign/update passes. Returns how many times a cluster was
/// found empty (and therefore frozen) over the whole run.
pub fn lloyds_loop(
    samples: &[ColorVector],
    centroids: &mut [ColorVector],
    iterations: usize,
) -> usize {
    assert!(!centroids.is_empty());
    assert!(centroids.len() <= samples.len());

    let mut assignments = vec![0usize; samples.len()];
    let mut frozen = 0;

    for iteration in 0..iterations {
        assign_points(samples, centroids, &mut assignments);
        let counts = update_centroids(samples, &assignments, centroids);

        for (cluster, count) in counts.iter().copied().enumerate() {
            if count == 0 {
                tracing::trace!(iteration, cluster, "empty cluster, keeping previous centroid");
                frozen += 1;
            }
        }
    }

    frozen
}
