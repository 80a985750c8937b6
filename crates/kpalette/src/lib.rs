pub mod config;
pub mod kmeans;
pub mod palette;
pub mod render;
#[cfg(feature = "image")]
pub mod sample;
mod types;

pub use config::PaletteConfig;
pub use kmeans::ClusterError;
pub use rgb::RGB8;
#[cfg(feature = "image")]
pub use sample::InputImage;
pub use types::{Centroid, ColorSum, ColorVector};

use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum PaletteError {
    #[snafu(display("invalid palette configuration"))]
    InvalidConfig { source: config::ConfigError },

    #[snafu(display("clustering failed"))]
    Cluster { source: ClusterError },
}

/// Extract a palette from raw sRGB bytes.
///
/// ```
/// let input = kpalette::InputImage::from_bytes(2, 2,
///   &[0, 0, 0, 255, 255, 255,
///     0, 0, 0, 255, 255, 255]
/// ).unwrap();
///
/// let config = kpalette::PaletteConfig {
///     k: 2,
///     grid_width: 2,
///     grid_height: 2,
///     ..Default::default()
/// };
/// let output = kpalette::colors(input, &config).unwrap();
///
/// let black = rgb::Rgb { r: 0, g: 0, b: 0 };
/// let white = rgb::Rgb { r: 255, g: 255, b: 255 };
/// assert_eq!(vec![black, white], output);
/// ```
///
/// The image is resized to the configured grid, clustered into `config.k` colors with
/// `config.iterations` passes, and the colors are returned darkest first. Fractional
/// components are truncated, see [`render::to_rgb8`].
#[cfg(feature = "image")]
pub fn colors(input: InputImage, config: &PaletteConfig) -> Result<Vec<RGB8>, PaletteError> {
    config.validate().context(InvalidConfigSnafu)?;
    let samples =
        sample::grid(input, config.grid_width, config.grid_height).context(InvalidConfigSnafu)?;
    let palette = palette::extract(&samples, config).context(ClusterSnafu)?;
    Ok(palette.iter().map(|c| render::to_rgb8(c.color)).collect())
}

/// Same as [`colors`], for a decoded image, returning the unrounded centroids.
#[cfg(feature = "image")]
pub fn palette_from_image(
    img: &image::RgbImage,
    config: &PaletteConfig,
) -> Result<Vec<Centroid>, PaletteError> {
    config.validate().context(InvalidConfigSnafu)?;
    let samples = sample::grid_from_image(img, config.grid_width, config.grid_height)
        .context(InvalidConfigSnafu)?;
    palette::extract(&samples, config).context(ClusterSnafu)
}
