//! # slowverb-core
//!
//! Batch time-stretch + convolution-reverb engine.
//!
//! ## Pipeline
//!
//! ```text
//! input.wav → Signal → stretch (nearest-neighbor) → stretched Signal
//!                                                        │
//!                                     ChunkConvolver (FFT per chunk)
//!                                     driven by the overlap-add scheduler
//!                                                        │
//!                                              crossfaded wet buffer
//!                                                        │
//!                                  dry + 0.5·wet → peak normalize → output.wav
//! ```
//!
//! The whole file is resident in memory; processing is sequential and
//! offline. Convolution memory is bounded per chunk, not per file.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod audio;
pub mod dsp;
pub mod engine;
pub mod error;
pub mod tempo;

// Convenience re-exports for downstream crates
pub use audio::signal::Signal;
pub use engine::{PipelineConfig, ReverbPipeline};
pub use error::SlowverbError;
pub use tempo::{FixedTempo, TempoEstimator};
