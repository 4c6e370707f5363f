//! Per-chunk linear convolution via FFT.
//!
//! ## Algorithm
//!
//! For a chunk of `n` samples and an impulse response of `m` samples:
//!
//! 1. `fft_size = n + m - 1` — the minimum size at which circular
//!    convolution equals linear convolution for these operand lengths.
//! 2. Forward-transform both operands, zero-padded to `fft_size`.
//! 3. Pointwise complex multiply the spectra.
//! 4. Inverse-transform and scale by `1 / fft_size` (rustfft transforms are
//!    unnormalized in both directions).
//! 5. Keep the first `n` samples; the remaining `m - 1` samples of
//!    convolution tail are discarded so every chunk's output lands at the
//!    chunk's own offset in the wet buffer.
//!
//! Step 5 trades the reverb tail that would bleed into the next chunk for a
//! fixed per-chunk output size. The scheduler's crossfade window is what
//! masks the seam.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use tracing::trace;

use crate::error::{Result, SlowverbError};

/// Convolves chunks of a signal against one fixed impulse response.
///
/// The planner caches FFT plans by size, and the forward-transformed
/// impulse spectrum is cached for the last `fft_size` seen — every
/// full-length chunk after the first reuses both.
pub struct ChunkConvolver {
    impulse: Vec<f32>,
    planner: FftPlanner<f32>,
    /// Impulse spectrum at `ir_spectrum_size`, empty until first use.
    ir_spectrum: Vec<Complex<f32>>,
    ir_spectrum_size: usize,
}

impl ChunkConvolver {
    /// Create a convolver for the given impulse response.
    ///
    /// # Errors
    /// `SlowverbError::InvalidArgument` if the impulse response is empty.
    pub fn new(impulse: Vec<f32>) -> Result<Self> {
        if impulse.is_empty() {
            return Err(SlowverbError::InvalidArgument(
                "impulse response must not be empty".into(),
            ));
        }
        Ok(Self {
            impulse,
            planner: FftPlanner::new(),
            ir_spectrum: Vec::new(),
            ir_spectrum_size: 0,
        })
    }

    /// Length of the impulse response in samples.
    pub fn impulse_len(&self) -> usize {
        self.impulse.len()
    }

    /// Linearly convolve `chunk` with the impulse response, returning exactly
    /// `chunk.len()` samples (the convolution tail is truncated).
    ///
    /// # Errors
    /// `SlowverbError::ResourceExhaustion` if the transform buffers cannot
    /// be allocated.
    pub fn convolve(&mut self, chunk: &[f32]) -> Result<Vec<f32>> {
        if chunk.is_empty() {
            return Ok(Vec::new());
        }

        let fft_size = chunk.len() + self.impulse.len() - 1;
        trace!(chunk_len = chunk.len(), fft_size, "convolving chunk");

        if self.ir_spectrum_size != fft_size {
            let mut ir_buf = alloc_complex(fft_size)?;
            for (dst, &src) in ir_buf.iter_mut().zip(&self.impulse) {
                *dst = Complex::new(src, 0.0);
            }
            self.planner.plan_fft_forward(fft_size).process(&mut ir_buf);
            self.ir_spectrum = ir_buf;
            self.ir_spectrum_size = fft_size;
        }

        let mut buf = alloc_complex(fft_size)?;
        for (dst, &src) in buf.iter_mut().zip(chunk) {
            *dst = Complex::new(src, 0.0);
        }
        self.planner.plan_fft_forward(fft_size).process(&mut buf);

        // Pointwise spectral multiply: the spectrum of the linear convolution.
        for (bin, ir_bin) in buf.iter_mut().zip(&self.ir_spectrum) {
            *bin *= *ir_bin;
        }

        self.planner.plan_fft_inverse(fft_size).process(&mut buf);

        let scale = 1.0 / fft_size as f32;
        Ok(buf[..chunk.len()].iter().map(|c| c.re * scale).collect())
    }
}

/// Allocate a zeroed complex buffer, reporting allocation failure instead of
/// aborting.
fn alloc_complex(len: usize) -> Result<Vec<Complex<f32>>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|e| {
        SlowverbError::ResourceExhaustion(format!("FFT buffer of {len} bins: {e}"))
    })?;
    buf.resize(len, Complex::new(0.0, 0.0));
    Ok(buf)
}
