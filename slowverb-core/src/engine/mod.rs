//! `ReverbPipeline` — the whole-file batch driver.
//!
//! ## Stages
//!
//! ```text
//! Signal ─► estimate tempo ─► stretch ─► apply_reverb (chunked FFT) ─► mix ─► normalize ─► Signal
//! ```
//!
//! The pipeline is sequential: the overlap-add pass must see chunks in
//! increasing offset order, and every other stage consumes its predecessor's
//! whole output. All failures abort the run; there is no partial output.

use tracing::info;

use crate::{
    audio::signal::Signal,
    dsp::{
        convolve::ChunkConvolver,
        impulse,
        mix::{self, WET_MIX},
        overlap::{self, CHUNK_SIZE, OVERLAP},
        stretch,
    },
    error::{Result, SlowverbError},
    tempo::{FixedTempo, TempoEstimator},
};

/// Configuration for `ReverbPipeline`.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Nominal chunk length for the overlap-add pass. Default: 44100 (1 s).
    pub chunk_size: usize,
    /// Samples shared between consecutive chunks. Must be smaller than
    /// `chunk_size`. Default: 1000.
    pub overlap: usize,
    /// Impulse response length in samples. Default: 88200 (2 s at 44.1 kHz).
    pub reverb_length: usize,
    /// Decay rate of the synthetic impulse response. Default: 5.0.
    pub decay: f32,
    /// Wet signal gain in the final mix. Default: 0.5.
    pub wet_mix: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            overlap: OVERLAP,
            reverb_length: impulse::REVERB_LENGTH,
            decay: impulse::DECAY,
            wet_mix: WET_MIX,
        }
    }
}

impl PipelineConfig {
    /// Check the configuration for values the DSP stages cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(SlowverbError::InvalidArgument(
                "chunk_size must be positive".into(),
            ));
        }
        if self.overlap >= self.chunk_size {
            return Err(SlowverbError::InvalidArgument(format!(
                "overlap ({}) must be smaller than chunk_size ({})",
                self.overlap, self.chunk_size
            )));
        }
        if self.reverb_length == 0 {
            return Err(SlowverbError::InvalidArgument(
                "reverb_length must be positive".into(),
            ));
        }
        if !self.decay.is_finite() || self.decay <= 0.0 {
            return Err(SlowverbError::InvalidArgument(format!(
                "decay must be a positive finite value, got {}",
                self.decay
            )));
        }
        if !self.wet_mix.is_finite() || self.wet_mix < 0.0 {
            return Err(SlowverbError::InvalidArgument(format!(
                "wet_mix must be a non-negative finite value, got {}",
                self.wet_mix
            )));
        }
        Ok(())
    }
}

/// The batch time-stretch + reverb pipeline.
pub struct ReverbPipeline {
    config: PipelineConfig,
    estimator: Box<dyn TempoEstimator>,
}

impl Default for ReverbPipeline {
    fn default() -> Self {
        Self {
            config: PipelineConfig::default(),
            estimator: Box::new(FixedTempo::default()),
        }
    }
}

impl ReverbPipeline {
    /// Create a pipeline with an explicit config and tempo estimator.
    ///
    /// # Errors
    /// `SlowverbError::InvalidArgument` when the config fails validation.
    pub fn new(config: PipelineConfig, estimator: Box<dyn TempoEstimator>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, estimator })
    }

    /// Run the full pipeline, producing the processed signal.
    ///
    /// # Errors
    /// - `SlowverbError::InvalidArgument` for a non-positive `target_bpm`
    ///   (or a degenerate estimator output).
    /// - `SlowverbError::ResourceExhaustion` if convolution buffers cannot
    ///   be allocated.
    pub fn process(&self, input: &Signal, target_bpm: f32) -> Result<Signal> {
        let original_bpm = self.estimator.estimate(input);
        info!(
            input_samples = input.len(),
            sample_rate = input.sample_rate,
            original_bpm,
            target_bpm,
            "pipeline started"
        );

        // ── 1. Time-stretch to the target tempo ──────────────────────────
        let stretched = stretch::stretch(&input.samples, original_bpm, target_bpm)?;

        // ── 2. Chunked convolution against the synthetic reverb kernel ───
        let kernel = impulse::synthesize(self.config.reverb_length, self.config.decay);
        let mut convolver = ChunkConvolver::new(kernel)?;
        let wet = overlap::apply_reverb(
            &stretched,
            &mut convolver,
            self.config.chunk_size,
            self.config.overlap,
        )?;

        // ── 3. Mix and normalize ──────────────────────────────────────────
        let mut mixed = mix::mix_wet(&stretched, &wet, self.config.wet_mix);
        mix::normalize_peak(&mut mixed);

        info!(
            output_samples = mixed.len(),
            stretch_factor = target_bpm / original_bpm,
            "pipeline finished"
        );

        Ok(Signal::new(mixed, input.sample_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn small_config() -> PipelineConfig {
        PipelineConfig {
            chunk_size: 64,
            overlap: 16,
            reverb_length: 128,
            decay: 5.0,
            wet_mix: 0.5,
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = small_config();
        cfg.overlap = 64;
        assert!(matches!(
            ReverbPipeline::new(cfg, Box::new(FixedTempo::default())),
            Err(SlowverbError::InvalidArgument(_))
        ));

        let mut cfg = small_config();
        cfg.reverb_length = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = small_config();
        cfg.wet_mix = f32::INFINITY;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn silent_input_stays_silent() {
        let pipeline =
            ReverbPipeline::new(small_config(), Box::new(FixedTempo::default())).unwrap();
        let input = Signal::new(vec![0.0; 500], 44_100);

        let out = pipeline.process(&input, 120.0).unwrap();

        assert_eq!(out.len(), 500);
        for &s in &out.samples {
            assert_eq!(s, 0.0);
            assert!(!s.is_nan());
        }
    }

    #[test]
    fn non_positive_target_bpm_fails() {
        let pipeline = ReverbPipeline::default();
        let input = Signal::new(vec![0.1; 64], 44_100);
        assert!(matches!(
            pipeline.process(&input, 0.0),
            Err(SlowverbError::InvalidArgument(_))
        ));
        assert!(matches!(
            pipeline.process(&input, -90.0),
            Err(SlowverbError::InvalidArgument(_))
        ));
    }

    #[test]
    fn unit_impulse_reproduces_the_kernel_shape() {
        let cfg = small_config();
        let reverb_length = cfg.reverb_length;
        let decay = cfg.decay;
        let pipeline = ReverbPipeline::new(cfg, Box::new(FixedTempo::default())).unwrap();

        // 48 samples = one chunk step, so no second chunk fades the tail.
        let mut samples = vec![0.0f32; 48];
        samples[0] = 1.0;
        let input = Signal::new(samples, 44_100);

        let out = pipeline.process(&input, 120.0).unwrap();
        assert_eq!(out.len(), 48);

        // Peak is at index 0: dry 1.0 plus half the kernel's unity head.
        assert_abs_diff_eq!(out.samples[0], 1.0, epsilon = 1e-4);
        // Past the impulse, the output is the wet tail alone — the kernel
        // scaled by wet_mix and the 1.5 normalization divisor.
        let kernel = crate::dsp::impulse::synthesize(reverb_length, decay);
        for i in 1..out.len() {
            assert_abs_diff_eq!(out.samples[i], kernel[i] / 3.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn stretching_changes_output_length() {
        let pipeline =
            ReverbPipeline::new(small_config(), Box::new(FixedTempo(120.0))).unwrap();
        let input = Signal::new(vec![0.2; 600], 44_100);

        let slowed = pipeline.process(&input, 90.0).unwrap();
        assert_eq!(slowed.len(), 800); // floor(600 / 0.75)

        let sped = pipeline.process(&input, 150.0).unwrap();
        assert_eq!(sped.len(), 480); // floor(600 / 1.25)
    }
}
