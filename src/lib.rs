//! img2ascii turns raster images into monochrome character art.
//!
//! The pipeline decodes PNG, JPEG or GIF bytes into a canonical RGBA buffer,
//! resizes it to a grid chosen by an aspect policy, scores per-pixel
//! luminance on a rayon worker pool, and quantizes each score to a glyph from
//! a darkest-to-lightest ramp. The [`banner`] module runs the same pipeline on
//! text drawn by a caller-supplied rasterizer.

pub mod banner;
pub mod convert;
pub mod glyph;
pub mod image;
pub mod luminance;
mod trace;
pub mod util;

pub use crate::banner::{render_banner, Banner, GlyphRasterizer};
pub use crate::convert::{
    convert, convert_banner, convert_with_options, render_field, render_file, AspectMode,
    ConversionMode, ConversionOptions, ConversionPlan, SizingPolicy,
};
pub use crate::glyph::{map_glyph, GlyphRamp, BANNER_RAMP, DEFAULT_RAMP};
pub use crate::image::decode::{decode, decode_file};
pub use crate::image::resize::resize;
pub use crate::image::{CanonicalImage, Resolution};
pub use crate::luminance::{
    luminance, score, score_sequential, score_with_workers, LuminanceField,
};
pub use crate::util::{Img2AsciiError, Img2AsciiResult};
