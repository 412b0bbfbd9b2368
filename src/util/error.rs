//! Error types for img2ascii.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for img2ascii operations.
pub type Img2AsciiResult<T> = std::result::Result<T, Img2AsciiError>;

/// Errors that can occur while converting an image to character art.
///
/// Every pipeline stage returns these unmodified to the caller; nothing in the
/// crate retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Img2AsciiError {
    /// The input bytes are not a supported image or are corrupt.
    #[error("failed to decode image: {reason}")]
    Decode { reason: String },
    /// The resize target has a zero dimension.
    #[error("invalid resize target {width}x{height}")]
    Resize { width: usize, height: usize },
    /// The destination could not be written.
    #[error("failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },
    /// The source file could not be read.
    #[error("failed to read {path}: {reason}")]
    Source { path: PathBuf, reason: String },
    /// The options or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// The pixel buffer length does not match the declared dimensions.
    #[error("pixel buffer has {got} bytes, expected {needed}")]
    BufferSize { needed: usize, got: usize },
    /// The scoring worker pool could not be started.
    #[error("failed to build worker pool: {reason}")]
    WorkerPool { reason: String },
    /// A banner rasterizer failed to produce an image.
    #[error("failed to rasterize banner: {reason}")]
    Raster { reason: String },
}
