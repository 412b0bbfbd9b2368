//! Rayon-parallel luminance scoring.
//!
//! The output buffer is split into `workers` contiguous slices of
//! `ceil(pixel_count / workers)` entries with `par_chunks_mut`. Each worker
//! owns exactly one slice of the output and the matching slice of RGBA input,
//! so no two workers touch the same slot and no locking is needed. Both
//! entry points return only after every slice is filled.

use crate::image::{CanonicalImage, CHANNELS};
use crate::luminance::{luminance, LuminanceField};
use crate::trace::{trace_event, trace_span};
use crate::util::{Img2AsciiError, Img2AsciiResult};
use rayon::prelude::*;
use std::thread;

/// Scores `image` on the global rayon pool using
/// `min(available parallelism, pixel_count)` workers.
pub fn score(image: &CanonicalImage) -> LuminanceField {
    let available = thread::available_parallelism().map_or(1, |n| n.get());
    let workers = available.min(image.resolution().pixel_count()).max(1);
    let _guard = trace_span!("score", workers = workers).entered();
    score_partitioned(image, workers)
}

/// Scores `image` on a dedicated pool of `min(workers, pixel_count)` threads.
///
/// Returns [`Img2AsciiError::InvalidInput`] when `workers` is zero.
pub fn score_with_workers(
    image: &CanonicalImage,
    workers: usize,
) -> Img2AsciiResult<LuminanceField> {
    if workers == 0 {
        return Err(Img2AsciiError::InvalidInput("worker count must be at least 1"));
    }
    let pixel_count = image.resolution().pixel_count();
    if pixel_count == 0 {
        return Ok(LuminanceField::from_vec(Vec::new(), image.width()));
    }
    let workers = workers.min(pixel_count);
    let _guard = trace_span!("score", workers = workers).entered();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|idx| format!("img2ascii-score-{idx}"))
        .build()
        .map_err(|err| Img2AsciiError::WorkerPool {
            reason: err.to_string(),
        })?;
    Ok(pool.install(|| score_partitioned(image, workers)))
}

fn score_partitioned(image: &CanonicalImage, workers: usize) -> LuminanceField {
    let pixel_count = image.resolution().pixel_count();
    let mut values = vec![0u8; pixel_count];
    if pixel_count == 0 {
        return LuminanceField::from_vec(values, image.width());
    }

    let chunk = pixel_count.div_ceil(workers.max(1));
    trace_event!("partition", pixel_count = pixel_count, chunk = chunk);

    values
        .par_chunks_mut(chunk)
        .zip(image.data().par_chunks(chunk * CHANNELS))
        .for_each(|(out, pixels)| {
            for (slot, px) in out.iter_mut().zip(pixels.chunks_exact(CHANNELS)) {
                *slot = luminance(px[0], px[1], px[2]);
            }
        });

    LuminanceField::from_vec(values, image.width())
}
