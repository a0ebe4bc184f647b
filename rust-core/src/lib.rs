//! Spectra Analysis - IQ Recording Spectral Core
//! 
//! Loads two-channel IQ recordings and derives their spectrogram and
//! power spectral density, with optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod error;
pub mod iq;
pub mod spectrum;
pub mod waveform;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::WaveformError;
pub use spectrum::{PsdEstimator, SpectrogramEngine};
pub use waveform::{load, Waveform, WaveformConfig};
