//! Bilinear resampling of canonical images.
//!
//! Resampling uses the `image` crate's triangle filter, which is bilinear on
//! upscale and widens its support on downscale so every source pixel under a
//! destination pixel contributes (an area approximation). The result is a
//! pure function of the source buffer and target size.

use crate::image::{CanonicalImage, Resolution};
use crate::trace::trace_span;
use crate::util::{Img2AsciiError, Img2AsciiResult};
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Resamples `src` to exactly `target`.
///
/// When `target` equals the source resolution the image is cloned without
/// resampling. A zero-width or zero-height target is a
/// [`Img2AsciiError::Resize`] error.
pub fn resize(src: &CanonicalImage, target: Resolution) -> Img2AsciiResult<CanonicalImage> {
    if target.width == 0 || target.height == 0 {
        return Err(Img2AsciiError::Resize {
            width: target.width,
            height: target.height,
        });
    }
    if target == src.resolution() {
        return Ok(src.clone());
    }
    let _guard = trace_span!(
        "resize",
        src_width = src.width(),
        src_height = src.height(),
        dst_width = target.width,
        dst_height = target.height
    )
    .entered();

    let buffer = to_rgba_image(src)?;
    let (dst_width, dst_height) = (to_u32(target.width)?, to_u32(target.height)?);
    let resized = imageops::resize(&buffer, dst_width, dst_height, FilterType::Triangle);

    CanonicalImage::new(
        src.identifier(),
        resized.into_raw(),
        target.width,
        target.height,
    )
}

fn to_rgba_image(src: &CanonicalImage) -> Img2AsciiResult<RgbaImage> {
    let (width, height) = (to_u32(src.width())?, to_u32(src.height())?);
    RgbaImage::from_raw(width, height, src.data().to_vec()).ok_or(
        Img2AsciiError::BufferSize {
            needed: src.resolution().pixel_count() * crate::image::CHANNELS,
            got: src.data().len(),
        },
    )
}

fn to_u32(value: usize) -> Img2AsciiResult<u32> {
    u32::try_from(value).map_err(|_| Img2AsciiError::InvalidInput("dimension exceeds u32"))
}
