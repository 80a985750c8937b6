use crate::config::PaletteConfig;
use crate::kmeans::{self, ClusterError};
use crate::types::{Centroid, ColorVector};

/// Order centroids by ascending component sum (darkest first).
///
/// The sort is stable: centroids with equal sums keep their relative order.
pub fn order(mut centroids: Vec<Centroid>) -> Vec<Centroid> {
    centroids.sort_by(|a, b| a.color.sum().total_cmp(&b.color.sum()));
    centroids
}

/// Cluster `samples` and return the palette in presentation order.
///
/// Only `k` and `iterations` are read from `config`; the grid size is a sampling concern.
pub fn extract(
    samples: &[ColorVector],
    config: &PaletteConfig,
) -> Result<Vec<Centroid>, ClusterError> {
    let centroids = kmeans::run(samples, config.k, config.iterations)?;
    Ok(order(centroids))
}
