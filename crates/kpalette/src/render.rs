use crate::types::{Centroid, ColorVector};
use rgb::RGB8;

/// Convert to 8-bit color: clamp each component to `[0, 255]`, then truncate.
pub fn to_rgb8(c: ColorVector) -> RGB8 {
    #[inline(always)]
    fn channel(v: f32) -> u8 {
        v.clamp(0.0, 255.0) as u8
    }
    RGB8 {
        r: channel(c.r),
        g: channel(c.g),
        b: channel(c.b),
    }
}

pub fn hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// A two-cell block painted with a 24-bit ANSI background, followed by the hex code.
pub fn swatch(c: RGB8) -> String {
    format!(
        "\x1b[48;2;{};{};{}m  \x1b[0m {}",
        c.r,
        c.g,
        c.b,
        hex(c)
    )
}

/// One `Color N: <swatch>` line per centroid, numbered from 1.
pub fn palette_lines(palette: &[Centroid]) -> Vec<String> {
    palette
        .iter()
        .enumerate()
        .map(|(i, c)| format!("Color {}: {}", i + 1, swatch(to_rgb8(c.color))))
        .collect()
}
