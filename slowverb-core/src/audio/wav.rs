//! WAV read/write using `hound`.
//!
//! This is the pipeline's only I/O boundary. Input may be 16/24/32-bit PCM
//! or 32-bit float; output is always written as 32-bit float so the
//! normalized samples survive untouched.
//!
//! Stereo and multi-channel files are rejected rather than downmixed — the
//! engine is mono end to end.

use std::path::Path;

use tracing::info;

use crate::audio::signal::Signal;
use crate::error::{Result, SlowverbError};

/// Read a mono WAV file into a `Signal`.
///
/// # Errors
/// - `SlowverbError::Wav` / `SlowverbError::Io` on open or decode failure.
/// - `SlowverbError::UnsupportedFormat` for multi-channel files or sample
///   formats hound cannot express as f32.
pub fn read_wav(path: &Path) -> Result<Signal> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    if spec.channels != 1 {
        return Err(SlowverbError::UnsupportedFormat(format!(
            "{}: expected mono input, got {} channels",
            path.display(),
            spec.channels
        )));
    }

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        hound::SampleFormat::Int => {
            if spec.bits_per_sample <= 16 {
                reader
                    .samples::<i16>()
                    .map(|s| s.map(|v| v as f32 / i16::MAX as f32))
                    .collect::<std::result::Result<Vec<_>, _>>()?
            } else {
                let max = ((1_i64 << (spec.bits_per_sample - 1)) - 1) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / max))
                    .collect::<std::result::Result<Vec<_>, _>>()?
            }
        }
    };

    info!(
        path = %path.display(),
        samples = samples.len(),
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        "read input WAV"
    );

    Ok(Signal::new(samples, spec.sample_rate))
}

/// Write a `Signal` as a 32-bit float mono WAV file.
pub fn write_wav(path: &Path, signal: &Signal) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: signal.sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in &signal.samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    info!(
        path = %path.display(),
        samples = signal.len(),
        sample_rate = signal.sample_rate,
        "wrote output WAV"
    );

    Ok(())
}
