//! Target-size resolution for the three aspect policies.
//!
//! All arithmetic is integer with truncating division, so a scaled axis may
//! land up to one unit short of the exact ratio. Scale and pixel results are
//! floored at 1 on each axis; an empty source resolves to 0x0 so the resizer
//! reports it.

use crate::image::Resolution;
use crate::util::math::mul_div;

/// Bounding box for full-size art.
pub const FULL_ART_BOX: Resolution = Resolution::new(65, 54);

/// Upper limit for 1:1 pixel mode.
pub const PIXEL_CAP: Resolution = Resolution::new(300, 200);

/// How the output grid size is derived from the source image.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SizingPolicy {
    /// Fit inside `bounds`, preserving aspect ratio.
    Scale { bounds: Resolution },
    /// Keep source size, shrinking proportionally when it exceeds `cap`.
    Pixel { cap: Resolution },
    /// Use exactly this size, ignoring aspect ratio.
    Fixed(Resolution),
}

impl SizingPolicy {
    /// Resolves the target resolution for an image of size `source`.
    pub fn resolve(&self, source: Resolution) -> Resolution {
        match *self {
            SizingPolicy::Fixed(size) => size,
            _ if source.pixel_count() == 0 => Resolution::default(),
            SizingPolicy::Scale { bounds } => at_least_one(fit_within(source, bounds)),
            SizingPolicy::Pixel { cap } => at_least_one(cap_sequential(source, cap)),
        }
    }
}

/// Fits `source` into `bounds` along whichever axis is relatively larger.
///
/// The width-constrained fit is used only when the source is strictly wider
/// than the box in aspect; equal or taller aspects are height-constrained.
fn fit_within(source: Resolution, bounds: Resolution) -> Resolution {
    let wider = (source.width as u64) * (bounds.height as u64)
        > (bounds.width as u64) * (source.height as u64);
    if wider {
        let height = mul_div(bounds.width, source.height, source.width).min(bounds.height);
        return Resolution::new(bounds.width, height);
    }
    let width = mul_div(bounds.height, source.width, source.height).min(bounds.width);
    Resolution::new(width, bounds.height)
}

/// Width is corrected first, then height against the already-corrected size.
///
/// Because the second step sees the output of the first, an image exceeding
/// both caps is shrunk by the height ratio of the width-corrected size, which
/// can differ from a single simultaneous ratio by a unit or two.
fn cap_sequential(source: Resolution, cap: Resolution) -> Resolution {
    let Resolution {
        mut width,
        mut height,
    } = source;
    if width > cap.width {
        height = mul_div(height, cap.width, width);
        width = cap.width;
    }
    if height > cap.height {
        width = mul_div(width, cap.height, height);
        height = cap.height;
    }
    Resolution::new(width, height)
}

fn at_least_one(size: Resolution) -> Resolution {
    Resolution::new(size.width.max(1), size.height.max(1))
}
