//! Shared utility helpers.

pub mod error;
pub(crate) mod math;

pub use error::{Img2AsciiError, Img2AsciiResult};
