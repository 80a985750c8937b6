use snafu::prelude::*;

pub const DEFAULT_K: usize = 5;
pub const DEFAULT_ITERATIONS: usize = 10;
/// Images are downsampled to a square grid of this side before clustering.
pub const DEFAULT_GRID_SIZE: u32 = 100;

#[derive(Debug, Snafu, PartialEq)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum ConfigError {
    #[snafu(display("number of colors must be positive"))]
    ZeroColors,

    #[snafu(display("sampling grid must be non-empty, got {width}x{height}"))]
    EmptyGrid { width: u32, height: u32 },

    #[snafu(display(
        "{k} colors requested but the {width}x{height} grid only has {samples} samples"
    ))]
    GridTooSmall {
        k: usize,
        width: u32,
        height: u32,
        samples: usize,
    },
}

/// Caller-side knobs for palette extraction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PaletteConfig {
    /// Number of palette colors.
    pub k: usize,
    /// Exact number of Lloyd passes; there is no early exit.
    pub iterations: usize,
    pub grid_width: u32,
    pub grid_height: u32,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            iterations: DEFAULT_ITERATIONS,
            grid_width: DEFAULT_GRID_SIZE,
            grid_height: DEFAULT_GRID_SIZE,
        }
    }
}

impl PaletteConfig {
    pub fn grid_samples(&self) -> usize {
        self.grid_width as usize * self.grid_height as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure!(self.k > 0, ZeroColorsSnafu);
        ensure!(
            self.grid_width > 0 && self.grid_height > 0,
            EmptyGridSnafu {
                width: self.grid_width,
                height: self.grid_height
            }
        );
        ensure!(
            self.k <= self.grid_samples(),
            GridTooSmallSnafu {
                k: self.k,
                width: self.grid_width,
                height: self.grid_height,
                samples: self.grid_samples()
            }
        );
        Ok(())
    }
}
