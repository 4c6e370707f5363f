//! Nearest-neighbor time-stretch resampler.
//!
//! `output[i] = input[floor(i * factor)]` with
//! `factor = target_tempo / original_tempo` and
//! `new_length = floor(input.len() / factor)`.
//!
//! This is sample selection, not a bandlimited resample — it aliases and it
//! does not preserve pitch. Fidelity is out of scope for this stage; the
//! point is hitting the target duration.

use tracing::debug;

use crate::error::{Result, SlowverbError};

/// Resample `input` so it plays at `target_tempo` instead of `original_tempo`.
///
/// A target below the original tempo lengthens the signal ("slowed"), a
/// target above shortens it.
///
/// # Errors
/// `SlowverbError::InvalidArgument` when either tempo is not strictly
/// positive or not finite.
pub fn stretch(input: &[f32], original_tempo: f32, target_tempo: f32) -> Result<Vec<f32>> {
    if !original_tempo.is_finite() || original_tempo <= 0.0 {
        return Err(SlowverbError::InvalidArgument(format!(
            "original tempo must be positive, got {original_tempo}"
        )));
    }
    if !target_tempo.is_finite() || target_tempo <= 0.0 {
        return Err(SlowverbError::InvalidArgument(format!(
            "target tempo must be positive, got {target_tempo}"
        )));
    }

    let factor = target_tempo / original_tempo;
    let new_length = (input.len() as f64 / factor as f64).floor() as usize;

    debug!(
        input_len = input.len(),
        new_length,
        factor,
        "time-stretch resample"
    );

    if input.is_empty() {
        return Ok(Vec::new());
    }

    let last = input.len() - 1;
    let output = (0..new_length)
        // Clamp: float rounding can push the largest computed index past the
        // final valid sample.
        .map(|i| input[((i as f64 * factor as f64) as usize).min(last)])
        .collect();

    Ok(output)
}
