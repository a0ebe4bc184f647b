//! Error type shared by the loader, the spectral engine and the waveform factory

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaveformError {
    #[error("Failed to read waveform file {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("Expected a two-channel (I/Q) recording, found {0} channel(s)")]
    ChannelCount(u16),

    #[error("Unsupported sample encoding: {bits}-bit {format}")]
    UnsupportedEncoding { bits: u16, format: &'static str },

    #[error("Signal has zero (or non-finite) energy and cannot be normalized")]
    DegenerateSignal,

    #[error("Spectrogram has no rows: recording is shorter than one {window_length}-sample window")]
    EmptySpectrogram { window_length: usize },

    #[error("Invalid analysis configuration: {0}")]
    InvalidConfig(&'static str),
}

impl WaveformError {
    /// True for failures caused by the input file rather than by the analysis
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            WaveformError::Load { .. }
                | WaveformError::ChannelCount(_)
                | WaveformError::UnsupportedEncoding { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, WaveformError>;
