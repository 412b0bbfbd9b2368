//! Canonical RGBA images plus decoding and resampling.
//!
//! `CanonicalImage` is the format-independent buffer every later stage reads:
//! row-major RGBA8 quads with no row padding, so pixel `i` starts at byte
//! `i * 4`. Alpha is straight (not premultiplied) and carried through
//! resampling, but luminance scoring ignores it.

use crate::util::{Img2AsciiError, Img2AsciiResult};

pub mod decode;
pub mod resize;

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Width and height of a pixel or character grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Resolution {
    /// Creates a resolution.
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Returns `width * height`.
    pub fn pixel_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Returns true when neither axis exceeds the matching axis of `bounds`.
    pub fn fits_within(&self, bounds: Resolution) -> bool {
        self.width <= bounds.width && self.height <= bounds.height
    }
}

/// Decoded image in canonical row-major RGBA8 layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalImage {
    identifier: String,
    resolution: Resolution,
    data: Vec<u8>,
}

impl CanonicalImage {
    /// Creates an image from an RGBA buffer of exactly `width * height * 4` bytes.
    pub fn new(
        identifier: impl Into<String>,
        data: Vec<u8>,
        width: usize,
        height: usize,
    ) -> Img2AsciiResult<Self> {
        let needed = buffer_len(width, height)?;
        if data.len() != needed {
            return Err(Img2AsciiError::BufferSize {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            identifier: identifier.into(),
            resolution: Resolution::new(width, height),
            data,
        })
    }

    /// Creates an image where every pixel has the same RGBA value.
    pub fn filled(
        identifier: impl Into<String>,
        width: usize,
        height: usize,
        rgba: [u8; 4],
    ) -> Img2AsciiResult<Self> {
        buffer_len(width, height)?;
        Ok(Self {
            identifier: identifier.into(),
            resolution: Resolution::new(width, height),
            data: rgba.repeat(width * height),
        })
    }

    /// Returns the name the image was created with (usually its source path).
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.resolution.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.resolution.height
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Returns the raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the RGBA quad at `(x, y)` if it is within bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let start = (y * self.width() + x) * CHANNELS;
        let quad = self.data.get(start..start + CHANNELS)?;
        Some([quad[0], quad[1], quad[2], quad[3]])
    }
}

fn buffer_len(width: usize, height: usize) -> Img2AsciiResult<usize> {
    width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or(Img2AsciiError::InvalidInput("image dimensions overflow"))
}

#[cfg(test)]
mod tests {
    use super::{CanonicalImage, Resolution};
    use crate::util::Img2AsciiError;

    #[test]
    fn pixel_count_multiplies_axes() {
        assert_eq!(Resolution::new(1, 1).pixel_count(), 1);
        assert_eq!(Resolution::new(10, 10).pixel_count(), 100);
        assert_eq!(Resolution::new(65, 54).pixel_count(), 3510);
        assert_eq!(Resolution::new(0, 0).pixel_count(), 0);
    }

    #[test]
    fn new_rejects_mismatched_buffer() {
        let err = CanonicalImage::new("short", vec![0u8; 15], 2, 2).unwrap_err();
        assert_eq!(err, Img2AsciiError::BufferSize { needed: 16, got: 15 });
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let err = CanonicalImage::filled("huge", usize::MAX, 2, [0, 0, 0, 255]).unwrap_err();
        assert!(matches!(err, Img2AsciiError::InvalidInput(_)));
        let err = CanonicalImage::new("huge", Vec::new(), usize::MAX / 2, 2).unwrap_err();
        assert!(matches!(err, Img2AsciiError::InvalidInput(_)));
    }

    #[test]
    fn pixel_reads_row_major_quads() {
        let data: Vec<u8> = (0u8..16).collect();
        let img = CanonicalImage::new("seq", data, 2, 2).unwrap();
        assert_eq!(img.pixel(1, 0), Some([4, 5, 6, 7]));
        assert_eq!(img.pixel(0, 1), Some([8, 9, 10, 11]));
        assert_eq!(img.pixel(2, 0), None);
    }
}
