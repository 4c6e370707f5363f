//! DSP stages of the batch pipeline, leaves first:
//!
//! - [`impulse`] — synthetic reverb kernel (exponential decay).
//! - [`stretch`] — nearest-neighbor time-stretch resampler.
//! - [`convolve`] — per-chunk FFT linear convolution.
//! - [`overlap`] — overlap-add scheduler with linear crossfade.
//! - [`mix`] — dry/wet mix and peak normalization.

pub mod convolve;
pub mod impulse;
pub mod mix;
pub mod overlap;
pub mod stretch;
