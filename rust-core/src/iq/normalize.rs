//! Channel combination and energy normalization

use crate::error::{Result, WaveformError};
use num_complex::Complex64;

/// Combine in-phase and quadrature channels into `I - jQ`
///
/// Channels of unequal length are truncated to the shorter one.
pub fn combine_channels(i: &[f64], q: &[f64]) -> Vec<Complex64> {
    i.iter()
        .zip(q.iter())
        .map(|(&re, &im)| Complex64::new(re, -im))
        .collect()
}

/// Euclidean norm of the whole sequence
pub fn l2_norm(samples: &[Complex64]) -> f64 {
    samples.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt()
}

/// Scale the sequence in-place to unit L2 norm
///
/// # Returns
/// The norm the samples were divided by
pub fn normalize_l2(samples: &mut [Complex64]) -> Result<f64> {
    let norm = l2_norm(samples);
    if norm == 0.0 || !norm.is_finite() {
        return Err(WaveformError::DegenerateSignal);
    }

    for z in samples.iter_mut() {
        *z /= norm;
    }

    Ok(norm)
}
