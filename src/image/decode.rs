//! Decoding PNG, JPEG and GIF bytes into canonical RGBA images via the `image` crate.

use crate::image::CanonicalImage;
use crate::trace::{trace_event, trace_span};
use crate::util::{Img2AsciiError, Img2AsciiResult};
use std::fs;
use std::path::Path;

/// Decodes an in-memory PNG, JPEG or GIF stream.
///
/// The format is sniffed from the leading bytes. Animated GIFs yield their
/// first frame. Unknown formats and truncated or corrupt streams are reported
/// as [`Img2AsciiError::Decode`].
pub fn decode(identifier: impl Into<String>, bytes: &[u8]) -> Img2AsciiResult<CanonicalImage> {
    let identifier = identifier.into();
    let _guard = trace_span!("decode", bytes = bytes.len()).entered();

    let dynamic = image::load_from_memory(bytes).map_err(|err| Img2AsciiError::Decode {
        reason: err.to_string(),
    })?;
    let rgba = dynamic.to_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    trace_event!("decoded", width = width, height = height);

    CanonicalImage::new(identifier, rgba.into_raw(), width, height)
}

/// Reads and decodes an image file; the path becomes the image identifier.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Img2AsciiResult<CanonicalImage> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| Img2AsciiError::Source {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    decode(path.display().to_string(), &bytes)
}
