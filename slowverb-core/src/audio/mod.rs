//! Audio data types and the WAV I/O boundary.

pub mod signal;
pub mod wav;

pub use signal::Signal;
