//! Glyph ramps and luminance-to-character quantization.

use crate::util::{Img2AsciiError, Img2AsciiResult};

/// Ramp for full-size art, darkest to lightest.
pub const DEFAULT_RAMP: &str = "@#%*o()1l=:-.";

/// Ramp for text banners, darkest to lightest (ends in a space).
pub const BANNER_RAMP: &str = "@#*+=-:. ";

/// Ordered ASCII glyphs, darkest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<u8>,
}

impl GlyphRamp {
    /// Builds a ramp from printable ASCII characters ordered darkest to lightest.
    pub fn new(glyphs: &str) -> Img2AsciiResult<Self> {
        if glyphs.is_empty() {
            return Err(Img2AsciiError::InvalidInput("glyph ramp must not be empty"));
        }
        if !glyphs.bytes().all(|b| b == b' ' || b.is_ascii_graphic()) {
            return Err(Img2AsciiError::InvalidInput(
                "glyph ramp must be printable ASCII",
            ));
        }
        Ok(Self {
            glyphs: glyphs.as_bytes().to_vec(),
        })
    }

    /// The full-art ramp `@#%*o()1l=:-.`.
    pub fn default_art() -> Self {
        Self {
            glyphs: DEFAULT_RAMP.as_bytes().to_vec(),
        }
    }

    /// The banner ramp `@#*+=-:. `.
    pub fn banner() -> Self {
        Self {
            glyphs: BANNER_RAMP.as_bytes().to_vec(),
        }
    }

    /// Returns the ramp with its order flipped (lightest first).
    pub fn reversed(&self) -> Self {
        let mut glyphs = self.glyphs.clone();
        glyphs.reverse();
        Self { glyphs }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Returns the ramp as a string.
    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII.
        std::str::from_utf8(&self.glyphs).unwrap_or_default()
    }

    /// Maps a luminance value to its glyph.
    ///
    /// `idx = luminance * (len - 1) / 255` with integer division, clamped to
    /// the last glyph.
    #[inline]
    pub fn glyph(&self, luminance: u8) -> char {
        let last = self.glyphs.len().saturating_sub(1);
        let idx = (usize::from(luminance) * last / 255).min(last);
        char::from(self.glyphs[idx])
    }
}

/// Maps one luminance value against `ramp`, optionally reversed.
///
/// Pipelines should reverse the ramp once with [`GlyphRamp::reversed`] and call
/// [`GlyphRamp::glyph`] per pixel instead.
pub fn map_glyph(luminance: u8, ramp: &GlyphRamp, reverse: bool) -> char {
    if reverse {
        ramp.reversed().glyph(luminance)
    } else {
        ramp.glyph(luminance)
    }
}
