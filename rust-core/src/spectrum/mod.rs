//! Spectral analysis with FFT

pub mod fft;
pub mod segment;
pub mod spectrogram;
pub mod psd;
pub mod view;

pub use fft::{fft_frequencies, FftEngine};
pub use psd::PsdEstimator;
pub use segment::{segments, window_count};
pub use spectrogram::{time_axis, SpectrogramEngine};
