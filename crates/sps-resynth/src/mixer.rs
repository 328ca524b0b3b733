//! Spectrum mixing.

use rustfft::num_complex::Complex;

use crate::error::{SynthError, SynthResult};

/// Adds two equal-length spectra bin by bin.
///
/// # Arguments
/// * `a` - Left operand
/// * `b` - Right operand
///
/// # Returns
/// A new spectrum with `result[i] = a[i] + b[i]` for every bin.
pub fn mix(a: &[Complex<f64>], b: &[Complex<f64>]) -> SynthResult<Vec<Complex<f64>>> {
    if a.len() != b.len() {
        return Err(SynthError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(a.iter().zip(b.iter()).map(|(x, y)| x + y).collect())
}
