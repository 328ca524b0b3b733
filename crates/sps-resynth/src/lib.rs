//! Sinusoidal-plus-stochastic spectral frame resynthesis.
//!
//! # Overview
//!
//! This crate reconstructs one complex spectral frame per hop from two
//! analysis products: a sparse sinusoidal-track representation (magnitude,
//! frequency, phase triples, rendered by a collaborator) and a coarse
//! stochastic envelope describing the noise-like residual. The residual
//! path resamples the envelope in the frequency domain, shapes random-phase
//! noise with it, and the two components are summed into an output spectrum
//! of `fft_size / 2 + 1` bins for downstream inversion and overlap-add.
//!
//! Windowing, overlap-add, and the upstream analysis that produces
//! envelopes and tracks live outside this crate.
//!
//! # Determinism
//!
//! All randomness flows through PCG32 generators created in [`rng`], with
//! component seeds derived via BLAKE3 hashing. Given the same seed,
//! configuration, and inputs, synthesized frames are bit-identical across
//! runs. Failed calls are all-or-nothing: sizes are validated before the
//! first random draw, so an error never perturbs the stream.
//!
//! # Numerical behavior
//!
//! Non-finite values in per-frame inputs (envelopes, tracks) are neither
//! detected nor corrected: NaN and infinity propagate through the transforms
//! and per-bin arithmetic with ordinary IEEE semantics. Configuration values
//! are finiteness-checked at setup.
//!
//! # Example
//!
//! ```
//! use sps_resynth::{NoSinusoids, SpsSynth, SynthConfig};
//!
//! let mut synth = SpsSynth::new(NoSinusoids, 42);
//! synth.configure(SynthConfig::new(44100.0, 1024, 256, 0.5)?)?;
//!
//! let stoc_env = vec![-24.0; 512];
//! let spectrum = synth.synthesize_frame(&[], &[], &[], &stoc_env)?;
//! assert_eq!(spectrum.len(), 513);
//! # Ok::<(), sps_resynth::SynthError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`config`] - Validated synthesis configuration
//! - [`error`] - Error types
//! - [`mixer`] - Per-bin spectrum addition
//! - [`resample`] - FFT-domain envelope resampling
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`stochastic`] - Noise-like residual synthesis
//! - [`synth`] - Frame orchestration and the sinusoidal collaborator trait

pub mod config;
pub mod error;
pub mod mixer;
pub mod resample;
pub mod rng;
pub mod stochastic;
pub mod synth;

// Re-export main types at crate root
pub use config::SynthConfig;
pub use error::{SynthError, SynthResult};
pub use resample::EnvelopeResampler;
pub use stochastic::StochasticSynth;
pub use synth::{NoSinusoids, SinusoidalSynthesizer, SpsSynth};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stochastic_only(seed: u32, config: SynthConfig) -> SpsSynth<NoSinusoids> {
        let mut synth = SpsSynth::new(NoSinusoids, seed);
        synth.configure(config).expect("configure");
        synth
    }

    #[test]
    fn test_unit_magnitude_scenario() {
        // fft 1024, hop 256, factor 0.5: 512-entry envelope, 513 output bins
        let config = SynthConfig::new(44100.0, 1024, 256, 0.5).expect("valid config");
        assert_eq!(config.stoc_env_size(), 512);

        let mut synth = stochastic_only(42, config);
        let stoc_env = vec![0.0; 512];
        let spectrum = synth
            .synthesize_frame(&[], &[], &[], &stoc_env)
            .expect("synthesize");

        assert_eq!(spectrum.len(), 513);
        for (i, bin) in spectrum.iter().enumerate() {
            assert!(
                (bin.norm() - 1.0).abs() < 1e-5,
                "bin {}: |{}| = {}",
                i,
                bin,
                bin.norm()
            );
        }
    }

    #[test]
    fn test_unit_magnitude_phases_spread() {
        let config = SynthConfig::new(44100.0, 1024, 256, 0.5).expect("valid config");
        let mut synth = stochastic_only(42, config);
        let spectrum = synth
            .synthesize_frame(&[], &[], &[], &vec![0.0; 512])
            .expect("synthesize");

        // Uniform phases put roughly half the bins in each half-plane
        let positive_re = spectrum.iter().filter(|bin| bin.re > 0.0).count();
        let positive_im = spectrum.iter().filter(|bin| bin.im > 0.0).count();
        assert!((150..=363).contains(&positive_re), "re split {}", positive_re);
        assert!((150..=363).contains(&positive_im), "im split {}", positive_im);
    }

    #[test]
    fn test_zero_energy_scenario() {
        let config = SynthConfig::new(44100.0, 1024, 256, 0.5).expect("valid config");
        let mut synth = stochastic_only(42, config);

        let spectrum = synth
            .synthesize_frame(&[], &[], &[], &vec![-200.0; 512])
            .expect("synthesize");

        for (i, bin) in spectrum.iter().enumerate() {
            assert!(bin.norm() < 1e-4, "bin {}: {}", i, bin.norm());
        }
    }

    #[test]
    fn test_stream_determinism() {
        let config = SynthConfig::new(48000.0, 512, 128, 0.5).expect("valid config");
        let envelope: Vec<f64> = (0..256).map(|i| -20.0 - (i as f64) * 0.1).collect();

        let mut synth_a = stochastic_only(1234, config.clone());
        let mut synth_b = stochastic_only(1234, config);

        let frames_a: Vec<_> = (0..4)
            .map(|_| {
                synth_a
                    .synthesize_frame(&[], &[], &[], &envelope)
                    .expect("synthesize")
            })
            .collect();
        let frames_b: Vec<_> = (0..4)
            .map(|_| {
                synth_b
                    .synthesize_frame(&[], &[], &[], &envelope)
                    .expect("synthesize")
            })
            .collect();

        assert_eq!(frames_a, frames_b);
    }

    #[test]
    fn test_different_seeds_produce_different_frames() {
        let config = SynthConfig::new(48000.0, 512, 128, 0.5).expect("valid config");
        let envelope = vec![0.0; 256];

        let mut synth_a = stochastic_only(1, config.clone());
        let mut synth_b = stochastic_only(2, config);

        let frame_a = synth_a
            .synthesize_frame(&[], &[], &[], &envelope)
            .expect("synthesize");
        let frame_b = synth_b
            .synthesize_frame(&[], &[], &[], &envelope)
            .expect("synthesize");

        assert_ne!(frame_a, frame_b);
    }

    #[test]
    fn test_configuration_errors_block_synthesis() {
        let mut synth = SpsSynth::new(NoSinusoids, 42);

        let err = synth
            .synthesize_frame(&[], &[], &[], &vec![0.0; 512])
            .unwrap_err();
        assert!(matches!(err, SynthError::NotConfigured));

        let bad = SynthConfig {
            sample_rate: 44100.0,
            fft_size: 1024,
            hop_size: 0,
            stochastic_factor: 0.5,
        };
        assert!(synth.configure(bad).is_err());

        // Still unconfigured after the rejected configure
        let err = synth
            .synthesize_frame(&[], &[], &[], &vec![0.0; 512])
            .unwrap_err();
        assert!(matches!(err, SynthError::NotConfigured));
    }

    #[test]
    fn test_size_errors_leave_prior_output_untouched() {
        let config = SynthConfig::new(44100.0, 1024, 256, 0.5).expect("valid config");
        let mut synth = stochastic_only(42, config);

        let first = synth
            .synthesize_frame(&[], &[], &[], &vec![0.0; 512])
            .expect("synthesize");
        let snapshot = first.clone();

        let err = synth
            .synthesize_frame(&[0.0, -6.0], &[440.0], &[0.0, 0.0], &vec![0.0; 512])
            .unwrap_err();
        assert!(matches!(err, SynthError::TrackSizeMismatch { .. }));

        assert_eq!(first, snapshot);
    }

    #[test]
    fn test_output_length_across_fft_sizes() {
        for fft_size in [16, 255, 256, 1024, 4096] {
            let config =
                SynthConfig::new(44100.0, fft_size, fft_size / 4, 0.5).expect("valid config");
            let envelope = vec![-12.0; config.stoc_env_size()];
            let mut synth = stochastic_only(42, config);

            let spectrum = synth
                .synthesize_frame(&[], &[], &[], &envelope)
                .expect("synthesize");
            assert_eq!(spectrum.len(), fft_size / 2 + 1);
        }
    }
}
