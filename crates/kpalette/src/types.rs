/// A color as three intensities on a shared scale (0–255 for samples taken from 8-bit
/// images). Components are assumed to be finite.
///
/// Distances, sums and averages are computed in `f64`: the squared distance between any
/// two finite `f32` vectors is below `f64::MAX`, so nothing overflows for finite input.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ColorVector {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorVector {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn squared_distance(self, other: Self) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        dr.mul_add(dr, dg.mul_add(dg, db * db))
    }

    /// Euclidean distance across all three components.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        self.squared_distance(other).sqrt()
    }

    /// Per-component mean, or `None` for an empty slice.
    pub fn average(vectors: &[ColorVector]) -> Option<ColorVector> {
        let mut acc = ColorSum::default();
        for &v in vectors {
            acc.push(v);
        }
        acc.mean()
    }

    /// Sum of the components, used as a brightness proxy.
    #[inline]
    pub fn sum(self) -> f64 {
        self.r as f64 + self.g as f64 + self.b as f64
    }

    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl From<[f32; 3]> for ColorVector {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<rgb::RGB8> for ColorVector {
    fn from(c: rgb::RGB8) -> Self {
        Self {
            r: c.r as f32,
            g: c.g as f32,
            b: c.b as f32,
        }
    }
}

/// Running per-component sums for one cluster.
#[derive(Debug, Copy, Clone, Default)]
pub struct ColorSum {
    r: f64,
    g: f64,
    b: f64,
    count: u32,
}

impl ColorSum {
    #[inline(always)]
    pub fn push(&mut self, v: ColorVector) {
        self.r += v.r as f64;
        self.g += v.g as f64;
        self.b += v.b as f64;
        self.count += 1;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn mean(&self) -> Option<ColorVector> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        Some(ColorVector {
            r: (self.r / n) as f32,
            g: (self.g / n) as f32,
            b: (self.b / n) as f32,
        })
    }
}

/// A cluster representative tagged with its cluster index.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Centroid {
    pub index: usize,
    pub color: ColorVector,
}
