//! Error types for spectral resynthesis.

use thiserror::Error;

/// Result type for resynthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur during configuration or frame synthesis.
///
/// Variants fall into two groups: configuration errors, raised by
/// [`validate`](crate::config::SynthConfig::validate) and by synthesis calls
/// made before a successful configuration, and size-mismatch errors, raised
/// per frame before any output is produced.
#[derive(Debug, Error)]
pub enum SynthError {
    /// FFT size of zero.
    #[error("invalid FFT size: {size}")]
    InvalidFftSize {
        /// The invalid FFT size.
        size: usize,
    },

    /// Hop size of zero, or larger than the FFT size.
    #[error("invalid hop size: {hop} (FFT size {fft})")]
    InvalidHopSize {
        /// The invalid hop size.
        hop: usize,
        /// The configured FFT size.
        fft: usize,
    },

    /// Non-positive or non-finite sample rate.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: f64,
    },

    /// Stochastic factor outside (0, 1].
    #[error("invalid stochastic factor: {factor} (expected 0 < factor <= 1)")]
    InvalidStochasticFactor {
        /// The invalid factor.
        factor: f64,
    },

    /// Stochastic factor so small the derived envelope size floors to zero.
    #[error("stochastic factor {factor} yields an empty envelope for FFT size {fft}")]
    DegenerateStochasticSize {
        /// The configured factor.
        factor: f64,
        /// The configured FFT size.
        fft: usize,
    },

    /// Synthesis was attempted before a successful configuration.
    #[error("synthesizer is not configured")]
    NotConfigured,

    /// Parallel track slices disagree in length.
    #[error(
        "track slices disagree in length: {magnitudes} magnitudes, \
         {frequencies} frequencies, {phases} phases"
    )]
    TrackSizeMismatch {
        /// Length of the magnitudes slice.
        magnitudes: usize,
        /// Length of the frequencies slice.
        frequencies: usize,
        /// Length of the phases slice.
        phases: usize,
    },

    /// Stochastic envelope length differs from the configured size.
    #[error("stochastic envelope has {actual} values, expected {expected}")]
    EnvelopeSizeMismatch {
        /// The size derived from the configuration.
        expected: usize,
        /// The supplied length.
        actual: usize,
    },

    /// Two spectra of different lengths cannot be mixed.
    #[error("spectrum length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// An empty envelope cannot be resampled.
    #[error("cannot resample an empty envelope")]
    EmptyEnvelope,

    /// Resample target size of zero.
    #[error("invalid resample target size: {size}")]
    InvalidResampleSize {
        /// The invalid target size.
        size: usize,
    },
}
