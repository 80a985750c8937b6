use crate::config::{ConfigError, EmptyGridSnafu};
use crate::types::ColorVector;
use image::imageops::{self, FilterType};
use image::{RgbImage, RgbaImage};
use snafu::prelude::*;

#[derive(Debug, Snafu, PartialEq)]
#[non_exhaustive]
pub enum InputImageError {
    #[snafu(display("image size must be positive"))]
    ZeroImageSize,

    #[snafu(display("buffer length {len} is not a multiple of 3"))]
    InvalidBufferLength { len: usize },

    #[snafu(display("buffer is empty"))]
    EmptyBuffer,

    #[snafu(display("image size ({width}x{height}) doesn't match the buffer size ({buf_size})"))]
    ImageSizeMismatch {
        width: u32,
        height: u32,
        buf_size: usize,
    },
}

/// A structure used as a façade for RGB image bytes.
#[derive(Debug, Copy, Clone)]
pub struct InputImage<'a> {
    width: u32,
    height: u32,
    buf: &'a [u8],
}

impl InputImage<'_> {
    /// The byte layout is assumed to be RGBRGBRGB…, row-major.
    pub fn from_bytes(
        width: u32,
        height: u32,
        buf: &[u8],
    ) -> Result<InputImage<'_>, InputImageError> {
        ensure!(!buf.is_empty(), EmptyBufferSnafu);
        ensure!(width > 0 && height > 0, ZeroImageSizeSnafu);
        ensure!(
            buf.len().is_multiple_of(3),
            InvalidBufferLengthSnafu { len: buf.len() }
        );
        ensure!(
            buf.len() == (width as usize) * (height as usize) * 3,
            ImageSizeMismatchSnafu {
                width,
                height,
                buf_size: buf.len()
            }
        );

        Ok(InputImage { width, height, buf })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Downsample raw image bytes to a `grid_width` x `grid_height` grid of samples.
pub fn grid(
    input: InputImage,
    grid_width: u32,
    grid_height: u32,
) -> Result<Vec<ColorVector>, ConfigError> {
    let mut img = RgbImage::new(input.width, input.height);
    for (dst, src) in img.pixels_mut().zip(input.buf.chunks_exact(3)) {
        *dst = image::Rgb([src[0], src[1], src[2]]);
    }
    grid_from_image(&img, grid_width, grid_height)
}

/// Bilinear resize to exactly `grid_width` x `grid_height`, then one sample per cell in
/// row-major order, on the 0–255 scale.
pub fn grid_from_image(
    img: &RgbImage,
    grid_width: u32,
    grid_height: u32,
) -> Result<Vec<ColorVector>, ConfigError> {
    ensure!(
        grid_width > 0 && grid_height > 0,
        EmptyGridSnafu {
            width: grid_width,
            height: grid_height
        }
    );

    let resized = imageops::resize(img, grid_width, grid_height, FilterType::Triangle);

    let samples: Vec<ColorVector> = resized
        .pixels()
        .map(|&image::Rgb([r, g, b])| ColorVector::new(r as f32, g as f32, b as f32))
        .collect();

    tracing::debug!(
        width = img.width(),
        height = img.height(),
        grid_width,
        grid_height,
        "sampled image"
    );

    Ok(samples)
}

/// Flatten an RGBA image onto a black background: each channel is scaled by alpha,
/// so fully transparent pixels become black.
pub fn composite_on_black(img: &RgbaImage) -> RgbImage {
    #[inline(always)]
    fn channel(c: u8, a: u8) -> u8 {
        (c as u32 * a as u32 / 255) as u8
    }

    let mut out = RgbImage::new(img.width(), img.height());
    for (dst, &image::Rgba([r, g, b, a])) in out.pixels_mut().zip(img.pixels()) {
        *dst = image::Rgb([channel(r, a), channel(g, a), channel(b, a)]);
    }
    out
}
