//! Synthesis configuration.
//!
//! A [`SynthConfig`] is plain data: it can be built in code or deserialized
//! from JSON, and it is inert until [`validate`](SynthConfig::validate)
//! accepts it. [`SpsSynth::configure`](crate::synth::SpsSynth::configure)
//! runs the validation gate, so a deserialized config cannot bypass it.

use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};

/// Configuration for one resynthesis stream.
///
/// Derived sizes ([`half_size`](Self::half_size),
/// [`stoc_env_size`](Self::stoc_env_size)) are computed on demand from the
/// stored fields, so re-configuring refreshes every size consistently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Audio sample rate in Hz. Must be positive and finite.
    pub sample_rate: f64,
    /// Transform size in samples. Must be positive.
    pub fft_size: usize,
    /// Samples advanced between successive frames. Must be positive and
    /// no larger than `fft_size`.
    pub hop_size: usize,
    /// Fraction of the FFT size covered by the stochastic envelope,
    /// in (0, 1].
    pub stochastic_factor: f64,
}

impl SynthConfig {
    /// Creates a configuration and validates it.
    ///
    /// # Arguments
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `fft_size` - Transform size in samples
    /// * `hop_size` - Frame advance in samples
    /// * `stochastic_factor` - Stochastic envelope fraction in (0, 1]
    ///
    /// # Returns
    /// The validated configuration.
    pub fn new(
        sample_rate: f64,
        fft_size: usize,
        hop_size: usize,
        stochastic_factor: f64,
    ) -> SynthResult<Self> {
        let config = Self {
            sample_rate,
            fft_size,
            hop_size,
            stochastic_factor,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every field and the consistency of the derived sizes.
    pub fn validate(&self) -> SynthResult<()> {
        if self.fft_size == 0 {
            return Err(SynthError::InvalidFftSize { size: self.fft_size });
        }
        if self.hop_size == 0 || self.hop_size > self.fft_size {
            return Err(SynthError::InvalidHopSize {
                hop: self.hop_size,
                fft: self.fft_size,
            });
        }
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(SynthError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !self.stochastic_factor.is_finite()
            || self.stochastic_factor <= 0.0
            || self.stochastic_factor > 1.0
        {
            return Err(SynthError::InvalidStochasticFactor {
                factor: self.stochastic_factor,
            });
        }
        if self.stoc_env_size() == 0 {
            return Err(SynthError::DegenerateStochasticSize {
                factor: self.stochastic_factor,
                fft: self.fft_size,
            });
        }
        Ok(())
    }

    /// Number of non-negative-frequency bins: `fft_size / 2 + 1`.
    pub fn half_size(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// Expected stochastic envelope length:
    /// `floor(fft_size * stochastic_factor)`.
    pub fn stoc_env_size(&self) -> usize {
        (self.fft_size as f64 * self.stochastic_factor).floor() as usize
    }
}
