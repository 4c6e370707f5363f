//! Dry/wet mix and peak normalization — the last stage before write-out.

use tracing::debug;

/// Default wet mix: half the reverb signal on top of the dry signal.
pub const WET_MIX: f32 = 0.5;

/// `out[i] = dry[i] + wet_mix * wet[i]`.
///
/// Both buffers must be the same length; the wet buffer is produced from the
/// dry one so this holds by construction.
pub fn mix_wet(dry: &[f32], wet: &[f32], wet_mix: f32) -> Vec<f32> {
    debug_assert_eq!(dry.len(), wet.len());
    dry.iter()
        .zip(wet)
        .map(|(&d, &w)| d + wet_mix * w)
        .collect()
}

/// Scale the buffer so its maximum absolute sample is 1.0.
///
/// A silent buffer (peak 0) is left untouched — normalizing it would divide
/// by zero.
pub fn normalize_peak(samples: &mut [f32]) {
    let peak = samples.iter().fold(0.0f32, |p, s| p.max(s.abs()));
    debug!(peak, samples = samples.len(), "peak normalization");

    if peak == 0.0 {
        return;
    }

    for sample in samples.iter_mut() {
        *sample /= peak;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn mix_adds_half_wet_by_default() {
        let dry = [1.0f32, 0.0, -0.5];
        let wet = [0.5f32, 1.0, 0.5];
        let out = mix_wet(&dry, &wet, WET_MIX);
        assert_eq!(out, vec![1.25, 0.5, -0.25]);
    }

    #[test]
    fn normalize_scales_peak_to_unity() {
        let mut samples = vec![0.5f32, -2.0, 1.0];
        normalize_peak(&mut samples);
        assert_abs_diff_eq!(samples[0], 0.25, epsilon = 1e-6);
        assert_abs_diff_eq!(samples[1], -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(samples[2], 0.5, epsilon = 1e-6);
    }

    #[test]
    fn normalize_leaves_silence_alone() {
        let mut samples = vec![0.0f32; 64];
        normalize_peak(&mut samples);
        for &s in &samples {
            assert_eq!(s, 0.0);
            assert!(!s.is_nan());
        }
    }

    #[test]
    fn normalize_handles_empty_buffer() {
        let mut samples: Vec<f32> = vec![];
        normalize_peak(&mut samples);
        assert!(samples.is_empty());
    }
}
