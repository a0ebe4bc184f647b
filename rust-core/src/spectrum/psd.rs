//! Per-bin reduction of a spectrogram across its windows

use crate::error::{Result, WaveformError};
use ndarray::{Array1, ArrayView2, Axis};
use num_complex::Complex64;

/// Spectral density estimator
pub struct PsdEstimator;

impl PsdEstimator {
    /// Arithmetic mean of the complex spectral values of every bin
    ///
    /// This averages complex bins, not their power, so phase-rotated
    /// contributions can cancel. It is the value stored on a `Waveform`;
    /// consumers take the magnitude. See [`PsdEstimator::estimate_power`] for
    /// the magnitude-squared average.
    ///
    /// # Errors
    /// `EmptySpectrogram` when the spectrogram has no rows.
    pub fn estimate(spectrogram: ArrayView2<'_, Complex64>) -> Result<Array1<Complex64>> {
        let rows = Self::check_rows(&spectrogram)?;
        let sum = spectrogram.sum_axis(Axis(0));
        Ok(sum.mapv(|s| s / rows as f64))
    }

    /// Mean of `|X|^2` per bin (periodogram averaging)
    ///
    /// # Errors
    /// `EmptySpectrogram` when the spectrogram has no rows.
    pub fn estimate_power(spectrogram: ArrayView2<'_, Complex64>) -> Result<Array1<f64>> {
        let rows = Self::check_rows(&spectrogram)?;
        let sum = spectrogram.map(|c| c.norm_sqr()).sum_axis(Axis(0));
        Ok(sum / rows as f64)
    }

    fn check_rows(spectrogram: &ArrayView2<'_, Complex64>) -> Result<usize> {
        match spectrogram.nrows() {
            0 => Err(WaveformError::EmptySpectrogram {
                window_length: spectrogram.ncols(),
            }),
            rows => Ok(rows),
        }
    }
}
