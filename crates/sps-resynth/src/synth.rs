//! Frame-level orchestration of sinusoidal and stochastic synthesis.
//!
//! [`SpsSynth`] wires a sinusoidal collaborator and the stochastic residual
//! synthesizer together: per hop it produces one output spectrum of
//! `fft_size / 2 + 1` bins, ready for downstream inversion and overlap-add.

use rand_pcg::Pcg32;
use rustfft::num_complex::Complex;

use crate::config::SynthConfig;
use crate::error::{SynthError, SynthResult};
use crate::mixer;
use crate::rng::create_component_rng;
use crate::stochastic::StochasticSynth;

/// Collaborator that turns sinusoidal tracks into a spectrum.
///
/// Implementations receive parallel track slices (already validated to share
/// one length) and the active configuration, and return a spectrum of
/// `config.half_size()` bins.
pub trait SinusoidalSynthesizer {
    /// Synthesizes the sinusoidal component of one frame.
    ///
    /// # Arguments
    /// * `magnitudes` - Track magnitudes in dB
    /// * `frequencies` - Track frequencies in Hz
    /// * `phases` - Track phases in radians
    /// * `config` - The active synthesis configuration
    ///
    /// # Returns
    /// A spectrum of `config.half_size()` complex bins.
    fn synthesize(
        &mut self,
        magnitudes: &[f64],
        frequencies: &[f64],
        phases: &[f64],
        config: &SynthConfig,
    ) -> SynthResult<Vec<Complex<f64>>>;
}

/// Collaborator that contributes no sinusoidal energy.
///
/// Produces an all-zero spectrum regardless of the tracks, which reduces the
/// orchestrator to purely stochastic resynthesis.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSinusoids;

impl SinusoidalSynthesizer for NoSinusoids {
    fn synthesize(
        &mut self,
        _magnitudes: &[f64],
        _frequencies: &[f64],
        _phases: &[f64],
        config: &SynthConfig,
    ) -> SynthResult<Vec<Complex<f64>>> {
        Ok(vec![Complex::new(0.0, 0.0); config.half_size()])
    }
}

/// Sinusoidal-plus-stochastic frame synthesizer.
///
/// Starts unconfigured; [`configure`](Self::configure) validates and stores
/// a [`SynthConfig`], after which [`synthesize_frame`](Self::synthesize_frame)
/// may be called once per hop. Re-configuring between calls is allowed and
/// refreshes every derived size. Beyond the configuration, the only state
/// carried across calls is the stochastic-phase RNG stream, derived from the
/// base seed so runs with equal seeds reproduce bit-identical frames.
pub struct SpsSynth<S> {
    sinusoids: S,
    stochastic: StochasticSynth,
    config: Option<SynthConfig>,
    rng: Pcg32,
}

impl<S: SinusoidalSynthesizer> SpsSynth<S> {
    /// Creates an unconfigured synthesizer.
    ///
    /// # Arguments
    /// * `sinusoids` - The sinusoidal synthesis collaborator
    /// * `seed` - Base seed for the stochastic-phase stream
    pub fn new(sinusoids: S, seed: u32) -> Self {
        Self {
            sinusoids,
            stochastic: StochasticSynth::new(),
            config: None,
            rng: create_component_rng(seed, "stochastic"),
        }
    }

    /// Validates `config` and makes it the active configuration.
    ///
    /// On failure the previous configuration, if any, stays active.
    pub fn configure(&mut self, config: SynthConfig) -> SynthResult<()> {
        config.validate()?;
        self.config = Some(config);
        Ok(())
    }

    /// Returns whether a configuration has been accepted.
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Returns the active configuration, if any.
    pub fn config(&self) -> Option<&SynthConfig> {
        self.config.as_ref()
    }

    /// Synthesizes the output spectrum for one hop.
    ///
    /// The sinusoidal collaborator renders the track set into a half-size
    /// spectrum, the stochastic synthesizer renders a full `fft_size`
    /// residual frame, and the first `fft_size / 2 + 1` residual bins are
    /// added to the sinusoidal spectrum. The mirrored upper half of the
    /// residual is not consumed here.
    ///
    /// Every size is validated before the first RNG draw, so a failed call
    /// produces no output and leaves the randomness stream where it was.
    ///
    /// # Arguments
    /// * `magnitudes` - Track magnitudes in dB
    /// * `frequencies` - Track frequencies in Hz
    /// * `phases` - Track phases in radians
    /// * `stoc_env` - Stochastic envelope in dB, of the configured length
    ///
    /// # Returns
    /// The summed output spectrum of `fft_size / 2 + 1` bins.
    pub fn synthesize_frame(
        &mut self,
        magnitudes: &[f64],
        frequencies: &[f64],
        phases: &[f64],
        stoc_env: &[f64],
    ) -> SynthResult<Vec<Complex<f64>>> {
        let config = self.config.as_ref().ok_or(SynthError::NotConfigured)?;

        if magnitudes.len() != frequencies.len() || magnitudes.len() != phases.len() {
            return Err(SynthError::TrackSizeMismatch {
                magnitudes: magnitudes.len(),
                frequencies: frequencies.len(),
                phases: phases.len(),
            });
        }
        let expected = config.stoc_env_size();
        if stoc_env.len() != expected {
            return Err(SynthError::EnvelopeSizeMismatch {
                expected,
                actual: stoc_env.len(),
            });
        }

        let sines = self
            .sinusoids
            .synthesize(magnitudes, frequencies, phases, config)?;
        let residual =
            self.stochastic
                .synthesize(stoc_env, config.hop_size, config.fft_size, &mut self.rng)?;

        mixer::mix(&sines, &residual[..config.half_size()])
    }
}
