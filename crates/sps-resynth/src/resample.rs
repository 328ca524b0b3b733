//! FFT-domain envelope resampling.
//!
//! Resamples a magnitude envelope of one length to another by round-tripping
//! through the frequency domain: forward FFT, spectral copy/zero-fill or
//! truncation, inverse FFT. Resampling to the input length is the identity
//! within floating tolerance.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::error::{SynthError, SynthResult};

/// Resamples real-valued envelopes via an FFT/IFFT round trip.
///
/// Owns its [`FftPlanner`], which memoizes plans across calls, so each
/// instance carries its own scratch state and concurrent callers need their
/// own resampler.
pub struct EnvelopeResampler {
    planner: FftPlanner<f64>,
}

impl EnvelopeResampler {
    /// Creates a resampler with an empty plan cache.
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Resamples `envelope` to `out_size` values.
    ///
    /// The input is forward-transformed, its low-frequency band is copied
    /// into a spectrum of the target length, and conjugate mirrors are
    /// written into the top band so the constructed spectrum stays symmetric
    /// for a real result. Upsampling zero-fills the band between the copied
    /// and mirrored halves (spectral interpolation); downsampling discards
    /// bins beyond the target range, which is lossy.
    ///
    /// # Arguments
    /// * `envelope` - Input values (any real-valued sequence)
    /// * `out_size` - Target length
    ///
    /// # Returns
    /// The resampled sequence of length `out_size`.
    pub fn resample(&mut self, envelope: &[f64], out_size: usize) -> SynthResult<Vec<f64>> {
        if envelope.is_empty() {
            return Err(SynthError::EmptyEnvelope);
        }
        if out_size == 0 {
            return Err(SynthError::InvalidResampleSize { size: out_size });
        }

        let in_size = envelope.len();

        let mut spectrum: Vec<Complex<f64>> = envelope
            .iter()
            .map(|&v| Complex::new(v, 0.0))
            .collect();
        let fft = self.planner.plan_fft_forward(in_size);
        fft.process(&mut spectrum);

        // Copy whichever non-negative-frequency band is smaller, then mirror
        // its conjugate into the top of the output. A mirror index that lands
        // back inside the copied band (the Nyquist slot when sizes are even)
        // keeps the directly copied value.
        let half_in = in_size / 2 + 1;
        let half_out = out_size / 2 + 1;
        let copied = half_in.min(half_out);

        let mut resized = vec![Complex::new(0.0, 0.0); out_size];
        resized[..copied].copy_from_slice(&spectrum[..copied]);
        for k in 1..copied {
            let mirror = out_size - k;
            if mirror >= copied {
                resized[mirror] = spectrum[k].conj();
            }
        }

        let ifft = self.planner.plan_fft_inverse(out_size);
        ifft.process(&mut resized);

        // rustfft transforms are unnormalized; 1/in_size undoes the forward
        // transform and carries the out/in resampling gain in one factor.
        let scale = 1.0 / in_size as f64;
        Ok(resized.iter().map(|bin| bin.re * scale).collect())
    }
}

impl Default for EnvelopeResampler {
    fn default() -> Self {
        Self::new()
    }
}
