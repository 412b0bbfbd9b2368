//! Text banners: rasterize a message, then convert it with the banner ramp.
//!
//! Font handling is left to a [`GlyphRasterizer`] supplied by the caller. The
//! rasterizer draws onto a canvas of `(5 + 16 * width) x (5 + 16 * height)`
//! pixels, which is resampled to exactly `width x height` before the banner
//! conversion so the output grid always has the requested size.

use crate::convert::{write_output, ConversionOptions, ConversionPlan};
use crate::image::resize::resize;
use crate::image::{CanonicalImage, Resolution};
use crate::trace::{trace_event, trace_span};
use crate::util::{Img2AsciiError, Img2AsciiResult};
use std::path::Path;

/// Banner width used when none is given.
pub const DEFAULT_BANNER_WIDTH: usize = 80;
/// Banner height used when none is given.
pub const DEFAULT_BANNER_HEIGHT: usize = 10;

const CANVAS_MARGIN: usize = 5;
const CANVAS_SCALE: usize = 16;
const FONT_HEIGHT_RATIO: f32 = 0.8;

/// Draws text into an RGBA image.
///
/// Implementations should paint dark glyphs on a light background and center
/// the message; [`Banner::font_size`] gives the conventional point size.
pub trait GlyphRasterizer {
    fn rasterize(
        &self,
        message: &str,
        canvas: Resolution,
        font_size: f32,
    ) -> Img2AsciiResult<CanonicalImage>;
}

/// A message and the character grid it should occupy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub width: usize,
    pub height: usize,
}

impl Banner {
    /// Creates a banner; zero dimensions fall back to 80x10.
    pub fn new(message: impl Into<String>, width: usize, height: usize) -> Self {
        Self {
            message: message.into(),
            width: if width == 0 { DEFAULT_BANNER_WIDTH } else { width },
            height: if height == 0 {
                DEFAULT_BANNER_HEIGHT
            } else {
                height
            },
        }
    }

    pub fn grid(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }

    /// Pixel size of the rasterization canvas.
    ///
    /// Returns [`Img2AsciiError::InvalidInput`] when the grid is too large
    /// for the canvas to be addressed.
    pub fn canvas(&self) -> Img2AsciiResult<Resolution> {
        Ok(Resolution::new(
            canvas_extent(self.width)?,
            canvas_extent(self.height)?,
        ))
    }

    pub fn font_size(&self) -> Img2AsciiResult<f32> {
        Ok(self.canvas()?.height as f32 * FONT_HEIGHT_RATIO)
    }

    /// Rasterizes and converts the banner, returning the art.
    pub fn render<R: GlyphRasterizer + ?Sized>(&self, rasterizer: &R) -> Img2AsciiResult<String> {
        let _guard =
            trace_span!("render_banner", width = self.width, height = self.height).entered();
        let canvas = self.canvas()?;
        let font_size = canvas.height as f32 * FONT_HEIGHT_RATIO;
        let image = rasterizer.rasterize(&self.message, canvas, font_size)?;
        if image.resolution() != canvas {
            return Err(Img2AsciiError::Raster {
                reason: format!(
                    "rasterizer returned {}x{}, expected {}x{}",
                    image.width(),
                    image.height(),
                    canvas.width,
                    canvas.height
                ),
            });
        }
        trace_event!(
            "rasterized",
            canvas_width = canvas.width,
            canvas_height = canvas.height
        );

        let glyph_image = resize(&image, self.grid())?;
        let plan = ConversionPlan::new(&ConversionOptions::banner(self.width, self.height))?;
        plan.render(&glyph_image)
    }
}

fn canvas_extent(cells: usize) -> Img2AsciiResult<usize> {
    cells
        .checked_mul(CANVAS_SCALE)
        .and_then(|px| px.checked_add(CANVAS_MARGIN))
        .ok_or(Img2AsciiError::InvalidInput("banner too large to rasterize"))
}

/// Renders `banner` and writes it atomically to `destination`.
pub fn render_banner<R: GlyphRasterizer + ?Sized, P: AsRef<Path>>(
    banner: &Banner,
    rasterizer: &R,
    destination: P,
) -> Img2AsciiResult<String> {
    let art = banner.render(rasterizer)?;
    let plan = ConversionPlan::new(&ConversionOptions::banner(banner.width, banner.height))?;
    write_output(&plan, destination.as_ref(), &art)?;
    Ok(art)
}
