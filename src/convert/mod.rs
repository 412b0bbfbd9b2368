//! Conversion orchestration: options, per-request plans, and file entry points.
//!
//! A conversion runs decode -> resolve target size -> resize -> score -> map and
//! writes the text atomically. Each call builds one immutable
//! [`ConversionPlan`] from its [`ConversionOptions`]; the plan carries the
//! already-reversed ramp and the sizing policy through every stage, so no
//! state is shared between calls. Any stage error aborts the call and is
//! returned unchanged.

mod output;
pub mod policy;

pub use policy::{SizingPolicy, FULL_ART_BOX, PIXEL_CAP};

use crate::glyph::GlyphRamp;
use crate::image::decode::decode_file;
use crate::image::resize::resize;
use crate::image::{CanonicalImage, Resolution};
use crate::luminance::{self, LuminanceField};
use crate::trace::{trace_event, trace_span};
use crate::util::{Img2AsciiError, Img2AsciiResult};
use std::path::{Path, PathBuf};

/// How the output size relates to the source size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AspectMode {
    /// Fit inside the scale box preserving aspect ratio.
    #[default]
    Scale,
    /// One character per source pixel, capped at [`PIXEL_CAP`].
    Pixel,
    /// Exactly `fixed_width` x `fixed_height`.
    Fixed,
}

/// Which built-in ramp a conversion uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ConversionMode {
    /// Full-size art with the default ramp.
    #[default]
    Default,
    /// Text banners with the banner ramp.
    Banner,
}

/// Caller-facing conversion settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionOptions {
    pub aspect_mode: AspectMode,
    /// Output width for [`AspectMode::Fixed`].
    pub fixed_width: usize,
    /// Output height for [`AspectMode::Fixed`].
    pub fixed_height: usize,
    /// Map dark pixels to the light end of the ramp.
    pub reverse: bool,
    pub mode: ConversionMode,
    /// Bounding box for [`AspectMode::Scale`].
    pub scale_box: Resolution,
    /// Replaces the mode's built-in ramp.
    pub ramp: Option<GlyphRamp>,
    /// Scoring pool size; `None` uses the available parallelism.
    pub workers: Option<usize>,
    /// When set, successful output is also copied here.
    pub debug_log: Option<PathBuf>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            aspect_mode: AspectMode::Scale,
            fixed_width: 0,
            fixed_height: 0,
            reverse: false,
            mode: ConversionMode::Default,
            scale_box: FULL_ART_BOX,
            ramp: None,
            workers: None,
            debug_log: None,
        }
    }
}

impl ConversionOptions {
    /// Options for a banner fitted into `width` x `height`.
    pub fn banner(width: usize, height: usize) -> Self {
        Self {
            mode: ConversionMode::Banner,
            scale_box: Resolution::new(width, height),
            ..Self::default()
        }
    }
}

/// Immutable per-request configuration derived from [`ConversionOptions`].
#[derive(Clone, Debug)]
pub struct ConversionPlan {
    ramp: GlyphRamp,
    policy: SizingPolicy,
    workers: Option<usize>,
    debug_log: Option<PathBuf>,
}

impl ConversionPlan {
    /// Validates `options` and resolves the ramp and sizing policy.
    pub fn new(options: &ConversionOptions) -> Img2AsciiResult<Self> {
        let base = match (&options.ramp, options.mode) {
            (Some(ramp), _) => ramp.clone(),
            (None, ConversionMode::Default) => GlyphRamp::default_art(),
            (None, ConversionMode::Banner) => GlyphRamp::banner(),
        };
        let ramp = if options.reverse {
            base.reversed()
        } else {
            base
        };

        let policy = match options.aspect_mode {
            AspectMode::Scale => {
                let bounds = options.scale_box;
                if bounds.width == 0 || bounds.height == 0 {
                    return Err(Img2AsciiError::Resize {
                        width: bounds.width,
                        height: bounds.height,
                    });
                }
                SizingPolicy::Scale { bounds }
            }
            AspectMode::Pixel => SizingPolicy::Pixel { cap: PIXEL_CAP },
            AspectMode::Fixed => {
                SizingPolicy::Fixed(Resolution::new(options.fixed_width, options.fixed_height))
            }
        };

        if options.workers == Some(0) {
            return Err(Img2AsciiError::InvalidInput(
                "worker count must be at least 1",
            ));
        }

        Ok(Self {
            ramp,
            policy,
            workers: options.workers,
            debug_log: options.debug_log.clone(),
        })
    }

    /// The ramp used for mapping, with any reversal already applied.
    pub fn ramp(&self) -> &GlyphRamp {
        &self.ramp
    }

    pub fn policy(&self) -> SizingPolicy {
        self.policy
    }

    /// Resizes, scores and maps an already-decoded image.
    pub fn render(&self, image: &CanonicalImage) -> Img2AsciiResult<String> {
        let target = self.policy.resolve(image.resolution());
        trace_event!(
            "target_resolved",
            src_width = image.width(),
            src_height = image.height(),
            width = target.width,
            height = target.height
        );

        let resized = resize(image, target)?;
        let field = match self.workers {
            Some(workers) => luminance::score_with_workers(&resized, workers)?,
            None => luminance::score(&resized),
        };
        Ok(render_field(&field, &self.ramp))
    }
}

/// Maps every luminance value through `ramp`, one `\n`-terminated line per row.
pub fn render_field(field: &LuminanceField, ramp: &GlyphRamp) -> String {
    let (width, height) = (field.width(), field.height());
    let mut art = String::with_capacity(width.saturating_add(1).saturating_mul(height));
    for y in 0..height {
        if let Some(row) = field.row(y) {
            art.extend(row.iter().map(|&l| ramp.glyph(l)));
        }
        art.push('\n');
    }
    art
}

/// Converts `source` to full-size art fitted into 65x54 with the default ramp.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    reverse: bool,
) -> Img2AsciiResult<()> {
    let options = ConversionOptions {
        reverse,
        ..ConversionOptions::default()
    };
    convert_with_options(source, destination, &options)
}

/// Converts `source` with the banner ramp, fitted into `width` x `height`.
pub fn convert_banner<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    width: usize,
    height: usize,
) -> Img2AsciiResult<()> {
    convert_with_options(source, destination, &ConversionOptions::banner(width, height))
}

/// Converts `source` using any aspect policy and ramp.
///
/// Nothing is written unless every stage succeeds.
pub fn convert_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    options: &ConversionOptions,
) -> Img2AsciiResult<()> {
    let (source, destination) = (source.as_ref(), destination.as_ref());
    let _guard = trace_span!(
        "convert",
        source = source.display().to_string().as_str(),
        mode = format!("{:?}", options.mode).as_str(),
        aspect = format!("{:?}", options.aspect_mode).as_str()
    )
    .entered();

    let plan = ConversionPlan::new(options)?;
    let image = decode_file(source)?;
    let art = plan.render(&image)?;
    write_output(&plan, destination, &art)
}

/// Decodes and renders `source` without writing a destination file.
///
/// The debug log, when configured, is still written; a failure there is
/// reported through tracing and does not fail the call.
pub fn render_file<P: AsRef<Path>>(
    source: P,
    options: &ConversionOptions,
) -> Img2AsciiResult<String> {
    let source = source.as_ref();
    let _guard = trace_span!(
        "convert",
        source = source.display().to_string().as_str(),
        mode = format!("{:?}", options.mode).as_str(),
        aspect = format!("{:?}", options.aspect_mode).as_str()
    )
    .entered();

    let plan = ConversionPlan::new(options)?;
    let image = decode_file(source)?;
    let art = plan.render(&image)?;
    if let Some(log) = &plan.debug_log {
        output::write_debug_log(log, &art);
    }
    Ok(art)
}

pub(crate) fn write_output(
    plan: &ConversionPlan,
    destination: &Path,
    art: &str,
) -> Img2AsciiResult<()> {
    output::write_atomic(destination, art)?;
    if let Some(log) = &plan.debug_log {
        output::write_debug_log(log, art);
    }
    Ok(())
}
