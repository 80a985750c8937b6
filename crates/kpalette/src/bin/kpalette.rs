use clap::Parser;
use kpalette::config::{DEFAULT_GRID_SIZE, DEFAULT_ITERATIONS, DEFAULT_K};
use kpalette::{palette_from_image, render, sample, PaletteConfig};
use snafu::{ResultExt, Whatever};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Print a small palette of representative colors for an image.
#[derive(Parser, Debug)]
#[command(name = "kpalette")]
struct Args {
    /// Path to a PNG, JPEG or GIF image
    image_path: PathBuf,

    /// Number of colors
    #[arg(short, long, default_value_t = DEFAULT_K)]
    k: usize,

    /// Number of k-means passes
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Side of the square sampling grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    grid: u32,
}

impl Args {
    fn config(&self) -> PaletteConfig {
        PaletteConfig {
            k: self.k,
            iterations: self.iterations,
            grid_width: self.grid,
            grid_height: self.grid,
        }
    }
}

#[snafu::report]
fn main() -> Result<(), Whatever> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = args.config();

    let decoded = image::open(&args.image_path)
        .with_whatever_context(|_| format!("could not open {}", args.image_path.display()))?;
    // Transparent areas sample as black
    let img = sample::composite_on_black(&decoded.to_rgba8());
    tracing::info!(
        path = %args.image_path.display(),
        width = img.width(),
        height = img.height(),
        "decoded image"
    );

    let palette = palette_from_image(&img, &config)
        .whatever_context("could not extract a palette")?;

    for line in render::palette_lines(&palette) {
        println!("{line}");
    }

    Ok(())
}
