//! Display-side transforms of a waveform's spectral arrays
//!
//! The core stores spectra in natural FFT order. Plots want a centered,
//! ascending frequency axis, magnitudes, and a selectable band around DC.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use num_complex::Complex64;
use std::ops::Range;

/// Rotate natural FFT order into centered order (numpy `fftshift`)
pub fn fft_shift<T: Clone>(values: &[T]) -> Vec<T> {
    let mut shifted = values.to_vec();
    shifted.rotate_right(values.len() / 2);
    shifted
}

/// Ascending, centered frequency axis
pub fn shifted_frequencies(f: &[f64]) -> Vec<f64> {
    fft_shift(f)
}

/// `|X|` of every spectrogram row, each row fft-shifted
pub fn spectrogram_magnitude_shifted(spectrogram: ArrayView2<'_, Complex64>) -> Array2<f64> {
    let mut magnitude = spectrogram.map(|c| c.norm());

    for mut row in magnitude.rows_mut() {
        let shifted = fft_shift(&row.to_vec());
        row.assign(&Array1::from(shifted));
    }

    magnitude
}

/// `|psd|` in centered order
pub fn psd_magnitude_shifted(psd: ArrayView1<'_, Complex64>) -> Vec<f64> {
    let magnitude: Vec<f64> = psd.iter().map(|c| c.norm()).collect();
    fft_shift(&magnitude)
}

/// Index range of a centered axis covering `-bandwidth/2 ..= bandwidth/2`
///
/// # Arguments
/// * `shifted_f` - Ascending frequency axis (see [`shifted_frequencies`])
/// * `bandwidth_hz` - Total displayed bandwidth
pub fn band_range(shifted_f: &[f64], bandwidth_hz: f64) -> Range<usize> {
    let half = bandwidth_hz / 2.0;
    let start = shifted_f.partition_point(|&f| f < -half);
    let end = shifted_f.partition_point(|&f| f <= half);
    start..end.max(start)
}

/// Selectable display bandwidth for a recording: `rate/16 ..= rate`
pub fn bandwidth_limits(sample_rate: f64) -> (f64, f64) {
    (sample_rate / 16.0, sample_rate)
}
