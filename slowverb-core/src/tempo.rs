//! Tempo estimation abstraction.
//!
//! The `TempoEstimator` trait is the extensibility point: the pipeline only
//! needs *some* original-tempo figure to derive a stretch factor, so a real
//! beat tracker can be swapped in without touching any DSP stage.

use crate::audio::signal::Signal;

/// Estimates the tempo of a signal in beats per minute.
pub trait TempoEstimator: Send + 'static {
    /// Return the estimated tempo of `signal` in BPM.
    ///
    /// Implementations must return a strictly positive value; the pipeline
    /// rejects non-positive tempos before stretching.
    fn estimate(&self, signal: &Signal) -> f32;
}

/// A constant-tempo "estimator".
///
/// Batch material with a known tempo doesn't need beat tracking; this is
/// also the default the pipeline ships with.
#[derive(Debug, Clone, Copy)]
pub struct FixedTempo(pub f32);

impl FixedTempo {
    /// 120 BPM, a common production default.
    pub const DEFAULT_BPM: f32 = 120.0;
}

impl Default for FixedTempo {
    fn default() -> Self {
        Self(Self::DEFAULT_BPM)
    }
}

impl TempoEstimator for FixedTempo {
    fn estimate(&self, _signal: &Signal) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_tempo_ignores_the_signal() {
        let estimator = FixedTempo(98.5);
        let silent = Signal::new(vec![0.0; 128], 44_100);
        let loud = Signal::new(vec![0.9; 128], 44_100);
        assert_eq!(estimator.estimate(&silent), 98.5);
        assert_eq!(estimator.estimate(&loud), 98.5);
    }

    #[test]
    fn default_is_120_bpm() {
        assert_eq!(FixedTempo::default().0, 120.0);
    }
}
