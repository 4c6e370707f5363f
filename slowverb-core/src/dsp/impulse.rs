//! Synthetic reverb impulse response.
//!
//! The kernel is a plain exponential tail, `exp(-decay * i / length)` —
//! a reverb "color", not a measured room response. It is synthesized once
//! and shared read-only across all chunk convolutions.

/// Impulse response length in samples: 2 seconds at 44.1 kHz.
pub const REVERB_LENGTH: usize = 88_200;

/// Decay rate of the exponential tail.
pub const DECAY: f32 = 5.0;

/// Synthesize a decaying impulse response of `length` samples.
///
/// `sample[0]` is always 1.0 and values decrease strictly toward
/// `exp(-decay)` at the end of the tail.
pub fn synthesize(length: usize, decay: f32) -> Vec<f32> {
    (0..length)
        .map(|i| (-decay * i as f32 / length as f32).exp())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn first_sample_is_unity() {
        let ir = synthesize(1024, DECAY);
        assert_eq!(ir[0], 1.0);
    }

    #[test]
    fn has_requested_length() {
        assert_eq!(synthesize(REVERB_LENGTH, DECAY).len(), REVERB_LENGTH);
        assert_eq!(synthesize(0, DECAY).len(), 0);
    }

    #[test]
    fn strictly_decreasing() {
        let ir = synthesize(4096, DECAY);
        for pair in ir.windows(2) {
            assert!(pair[1] < pair[0], "{} !< {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn tail_approaches_exp_of_minus_decay() {
        let n = 10_000;
        let ir = synthesize(n, DECAY);
        let expected = (-DECAY * (n as f32 - 1.0) / n as f32).exp();
        assert_relative_eq!(ir[n - 1], expected, max_relative = 1e-5);
    }
}
