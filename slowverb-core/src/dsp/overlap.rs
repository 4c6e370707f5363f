//! Overlap-add scheduler with linear crossfade.
//!
//! ## Chunk walk
//!
//! ```text
//! offset:   0          step       2·step      ...
//!           |—— chunk ——|
//!                  |—— chunk ——|
//!                         |—— chunk ——|        step = chunk_size - overlap
//! ```
//!
//! Each chunk is convolved independently; where two chunks share samples
//! (the `overlap`-sample head of every chunk after the first) the new chunk
//! is blended against what the previous chunk already wrote:
//! `fade_out(j) = (overlap - j) / overlap`, `fade_in(j) = j / overlap`,
//! summing to exactly 1 at every position.
//!
//! Chunks must be processed in increasing offset order — each blend reads
//! the previous chunk's already-written samples.

use tracing::debug;

use crate::dsp::convolve::ChunkConvolver;
use crate::error::{Result, SlowverbError};

/// Nominal chunk length in samples: 1 second at 44.1 kHz.
pub const CHUNK_SIZE: usize = 44_100;

/// Samples shared between consecutive chunks.
pub const OVERLAP: usize = 1_000;

/// The `(offset, length)` sequence of chunks covering `total_len` samples.
///
/// The step between offsets is `chunk_size - overlap`; the final chunk is
/// clipped to the signal end. The union of all spans covers `[0, total_len)`
/// with no gaps. Caller must ensure `overlap < chunk_size`.
pub fn chunk_spans(
    total_len: usize,
    chunk_size: usize,
    overlap: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let step = chunk_size - overlap;
    (0usize..)
        .map(move |k| k * step)
        .take_while(move |&offset| offset < total_len)
        .map(move |offset| (offset, chunk_size.min(total_len - offset)))
}

/// Convolve `signal` chunk-by-chunk against `convolver`'s impulse response,
/// crossfading adjacent chunk outputs into one wet buffer of `signal.len()`
/// samples.
///
/// # Errors
/// - `SlowverbError::InvalidArgument` when `chunk_size == 0` or
///   `overlap >= chunk_size` (the walk would not advance).
/// - Errors from [`ChunkConvolver::convolve`] are propagated.
pub fn apply_reverb(
    signal: &[f32],
    convolver: &mut ChunkConvolver,
    chunk_size: usize,
    overlap: usize,
) -> Result<Vec<f32>> {
    if chunk_size == 0 {
        return Err(SlowverbError::InvalidArgument(
            "chunk size must be positive".into(),
        ));
    }
    if overlap >= chunk_size {
        return Err(SlowverbError::InvalidArgument(format!(
            "overlap ({overlap}) must be smaller than chunk size ({chunk_size})"
        )));
    }

    let mut wet = vec![0.0f32; signal.len()];
    let mut chunks = 0usize;

    for (offset, len) in chunk_spans(signal.len(), chunk_size, overlap) {
        let wet_chunk = convolver.convolve(&signal[offset..offset + len])?;
        debug_assert_eq!(wet_chunk.len(), len);

        for (j, &sample) in wet_chunk.iter().enumerate() {
            if offset > 0 && j < overlap {
                let fade_out = (overlap - j) as f32 / overlap as f32;
                let fade_in = j as f32 / overlap as f32;
                wet[offset + j] = wet[offset + j] * fade_out + sample * fade_in;
            } else {
                wet[offset + j] = sample;
            }
        }

        chunks += 1;
    }

    debug!(
        samples = signal.len(),
        chunks, chunk_size, overlap, "overlap-add pass complete"
    );

    Ok(wet)
}
