//! Stochastic residual synthesis.
//!
//! Builds a noise-like spectral frame from a coarse dB envelope: the
//! envelope is resampled to the non-negative-frequency bin count, each bin
//! gets the envelope's linear amplitude with a fresh uniform random phase,
//! and the upper half of the frame mirrors the lower half.

use std::f64::consts::PI;

use rand::Rng;
use rand_pcg::Pcg32;
use rustfft::num_complex::Complex;

use crate::error::{SynthError, SynthResult};
use crate::resample::EnvelopeResampler;

/// Synthesizes the stochastic residual component of a frame.
///
/// Owns the envelope resampler (and through it the FFT plan cache), so each
/// concurrent caller needs its own instance and its own RNG stream.
pub struct StochasticSynth {
    resampler: EnvelopeResampler,
}

impl StochasticSynth {
    /// Creates a stochastic synthesizer.
    pub fn new() -> Self {
        Self {
            resampler: EnvelopeResampler::new(),
        }
    }

    /// Synthesizes one residual frame of `fft_size` complex bins.
    ///
    /// The envelope is resampled to `fft_size / 2 + 1` dB values and every
    /// bin's amplitude is `10^(dB/20)` of its resampled envelope value. Each
    /// bin draws one fresh phase, uniform in [0, 2π), from `rng`.
    ///
    /// Mirror bins at `fft_size - i - 1` reuse the same complex value as bin
    /// i rather than its conjugate, so the frame is only approximately
    /// symmetric and the eventual time-domain signal only approximately
    /// real-valued. A strictly real output would require writing the
    /// conjugate into the mirror bin instead.
    ///
    /// `hop_size` is validated as part of the contract but does not shape
    /// the frame; the frame advance belongs to the overlap-add stage.
    ///
    /// # Arguments
    /// * `stoc_env` - Stochastic envelope in dB, any length
    /// * `hop_size` - Frame advance in samples, must be positive
    /// * `fft_size` - Output frame length, must be positive
    /// * `rng` - Randomness source for the per-bin phases
    ///
    /// # Returns
    /// A spectral frame of `fft_size` complex bins.
    pub fn synthesize(
        &mut self,
        stoc_env: &[f64],
        hop_size: usize,
        fft_size: usize,
        rng: &mut Pcg32,
    ) -> SynthResult<Vec<Complex<f64>>> {
        if fft_size == 0 {
            return Err(SynthError::InvalidFftSize { size: fft_size });
        }
        if hop_size == 0 {
            return Err(SynthError::InvalidHopSize {
                hop: hop_size,
                fft: fft_size,
            });
        }

        let half_size = fft_size / 2 + 1;
        let env_db = self.resampler.resample(stoc_env, half_size)?;

        let mut frame = vec![Complex::new(0.0, 0.0); fft_size];
        for (i, &db) in env_db.iter().enumerate() {
            let phase = 2.0 * PI * rng.gen::<f64>();
            let amplitude = 10f64.powf(db / 20.0);
            let bin = Complex::new(amplitude * phase.cos(), amplitude * phase.sin());

            frame[i] = bin;
            // Same value, not the conjugate; see the method docs
            frame[fft_size - i - 1] = bin;
        }

        Ok(frame)
    }
}

impl Default for StochasticSynth {
    fn default() -> Self {
        Self::new()
    }
}
