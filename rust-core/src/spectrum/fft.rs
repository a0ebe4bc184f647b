//! FFT engine using rustfft for complex-valued (IQ) signals
//!
//! Plans one forward transform per window length and reuses it for every window

use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Forward FFT engine for complex signals
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Complex FFT processor
    fft: Arc<dyn Fft<f64>>,

    /// Reusable scratch space
    scratch: Vec<Complex64>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples, any positive length)
    pub fn new(fft_size: usize) -> Self {
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(fft_size);
        let scratch = vec![Complex64::new(0.0, 0.0); fft.get_inplace_scratch_len()];

        Self {
            fft_size,
            fft,
            scratch,
        }
    }

    /// Transform consecutive `fft_size` chunks of `buffer` in-place
    ///
    /// Output bins are in natural order (DC first, negative frequencies in the
    /// upper half). No scaling is applied. `buffer.len()` must be a multiple
    /// of `fft_size`.
    pub(crate) fn process_frames(&mut self, buffer: &mut [Complex64]) {
        debug_assert_eq!(buffer.len() % self.fft_size.max(1), 0);
        if buffer.is_empty() {
            return;
        }
        self.fft.process_with_scratch(buffer, &mut self.scratch);
    }

    /// Compute the spectrum of a single window
    ///
    /// # Arguments
    /// * `signal` - Input signal (zero-padded or truncated to `fft_size`)
    pub fn compute(&mut self, signal: &[Complex64]) -> Vec<Complex64> {
        let mut buffer = vec![Complex64::new(0.0, 0.0); self.fft_size];
        let copy_len = signal.len().min(self.fft_size);
        buffer[..copy_len].copy_from_slice(&signal[..copy_len]);

        self.process_frames(&mut buffer);
        buffer
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Frequency of each bin in Hz, unshifted (same layout as numpy `fftfreq`)
    pub fn frequency_axis(&self, sample_rate: f64) -> Vec<f64> {
        fft_frequencies(self.fft_size, sample_rate)
    }
}

/// Unshifted FFT bin frequencies for an `n`-point transform
///
/// Bins `0..=(n-1)/2` are non-negative, the rest wrap to negative frequencies.
pub fn fft_frequencies(n: usize, sample_rate: f64) -> Vec<f64> {
    let resolution = sample_rate / n as f64;
    let last_positive = (n.saturating_sub(1)) / 2;

    (0..n)
        .map(|k| {
            let signed = if k <= last_positive {
                k as f64
            } else {
                k as f64 - n as f64
            };
            signed * resolution
        })
        .collect()
}
