//! Per-pixel perceptual luminance.
//!
//! Luminance uses the Rec. 709 weights
//! `round(0.2126 * R + 0.7152 * G + 0.0722 * B)`, so it stays in `0..=255`.
//! Alpha is ignored. The field is row-major: entry `i` belongs to pixel
//! `(row = i / width, col = i % width)`.

use crate::image::{CanonicalImage, CHANNELS};

mod parallel;

pub use parallel::{score, score_with_workers};

/// Computes the perceptual luminance of one RGB triple.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let l = 0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b);
    l.round().clamp(0.0, 255.0) as u8
}

/// Row-major luminance values, one per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LuminanceField {
    values: Vec<u8>,
    width: usize,
}

impl LuminanceField {
    pub(crate) fn from_vec(values: Vec<u8>, width: usize) -> Self {
        Self { values, width }
    }

    /// Returns the field width (pixels per row).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of complete rows.
    pub fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.values.len() / self.width
        }
    }

    /// Returns all values in row-major order.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Returns row `y`, if present.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let start = y.checked_mul(self.width)?;
        self.values.get(start..start.checked_add(self.width)?)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Single-threaded reference scorer.
pub fn score_sequential(image: &CanonicalImage) -> LuminanceField {
    let values = image
        .data()
        .chunks_exact(CHANNELS)
        .map(|px| luminance(px[0], px[1], px[2]))
        .collect();
    LuminanceField::from_vec(values, image.width())
}
