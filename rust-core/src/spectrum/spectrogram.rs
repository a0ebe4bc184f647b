//! Spectrogram computation
//!
//! Segments the signal into strided windows and transforms every window with a
//! rectangular (implicit) window function.

use super::fft::FftEngine;
use super::segment::{segments, window_count};
use ndarray::Array2;
use num_complex::Complex64;

/// Computes `W x window_length` complex spectrograms
pub struct SpectrogramEngine {
    fft_engine: FftEngine,
}

impl SpectrogramEngine {
    /// Create new engine for a fixed window length
    pub fn new(window_length: usize) -> Self {
        Self {
            fft_engine: FftEngine::new(window_length),
        }
    }

    pub fn window_length(&self) -> usize {
        self.fft_engine.fft_size()
    }

    /// Compute the spectrogram of `samples`
    ///
    /// # Arguments
    /// * `samples` - Complex sample sequence
    /// * `step` - Sample advance between windows
    ///
    /// # Returns
    /// Row `i` holds the FFT of `samples[i*step .. i*step + window_length]`.
    /// A signal shorter than one window yields a `0 x window_length` matrix.
    /// `step` must be positive (checked in debug builds); release builds
    /// return no rows for a zero step. `WaveformConfig::validate` rejects it.
    pub fn compute(&mut self, samples: &[Complex64], step: usize) -> Array2<Complex64> {
        debug_assert!(step > 0, "step must be positive");
        let window_length = self.window_length();
        let rows = window_count(samples.len(), window_length, step);

        let mut buffer = Vec::with_capacity(rows * window_length);
        for window in segments(samples, window_length, step) {
            buffer.extend_from_slice(window);
        }

        // All rows share one planned transform
        self.fft_engine.process_frames(&mut buffer);

        log::trace!("Spectrogram computed: {} x {}", rows, window_length);

        Array2::from_shape_vec((rows, window_length), buffer)
            .expect("segmentation yields rows * window_length samples")
    }
}

/// Start time in seconds of each spectrogram row
pub fn time_axis(rows: usize, step: usize, sample_rate: f64) -> Vec<f64> {
    (0..rows)
        .map(|i| (i * step) as f64 / sample_rate)
        .collect()
}
