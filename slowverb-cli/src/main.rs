//! Slowverb batch front-end.
//!
//! ```text
//! slowverb <input_file> <output_file> <target_bpm>
//! ```
//!
//! Reads a mono WAV, stretches it to the target tempo, applies the
//! convolution reverb, and writes the normalized result. Any failure prints
//! a message and exits with status 1.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{bail, Context};
use slowverb_core::{audio::wav, ReverbPipeline};
use tracing::info;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    match run() {
        Ok(output_path) => {
            println!("Processed audio saved to {}", output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("slowverb: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<PathBuf> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        let program = args.first().map(String::as_str).unwrap_or("slowverb");
        bail!("usage: {program} <input_file> <output_file> <target_bpm>");
    }

    let input_path = PathBuf::from(&args[1]);
    let output_path = PathBuf::from(&args[2]);
    let target_bpm: f32 = args[3]
        .parse()
        .with_context(|| format!("invalid target BPM: {}", args[3]))?;

    let started = Instant::now();

    let input = wav::read_wav(&input_path)
        .with_context(|| format!("reading {}", input_path.display()))?;

    let pipeline = ReverbPipeline::default();
    let output = pipeline.process(&input, target_bpm)?;

    wav::write_wav(&output_path, &output)
        .with_context(|| format!("writing {}", output_path.display()))?;

    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        target_bpm,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "batch run complete"
    );

    Ok(output_path)
}
