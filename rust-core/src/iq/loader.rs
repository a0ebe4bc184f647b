//! WAV loading for two-channel IQ recordings
//!
//! Channel 0 carries the in-phase component, channel 1 the quadrature component.

use crate::error::{Result, WaveformError};
use hound::{SampleFormat, WavReader};
use std::path::Path;

/// Raw I/Q channels as read from disk
#[derive(Debug, Clone, PartialEq)]
pub struct IqRecording {
    /// Sample rate in Hz
    pub sample_rate: u32,

    /// In-phase channel
    pub i: Vec<f64>,

    /// Quadrature channel
    pub q: Vec<f64>,
}

impl IqRecording {
    /// Number of sample frames (length of one channel)
    pub fn len(&self) -> usize {
        self.i.len()
    }

    pub fn is_empty(&self) -> bool {
        self.i.is_empty()
    }
}

/// Read a two-channel WAV file
///
/// Integer PCM samples are kept at their integer value and float samples are
/// widened; the caller normalizes the combined signal anyway. Unsigned 8-bit
/// PCM is re-centered to signed `-128..=127`, so silence carries no DC offset.
///
/// Supported encodings: 8/16/24/32-bit integer PCM and 32-bit float.
pub fn read_iq_wav(path: &Path) -> Result<IqRecording> {
    let load_err = |source: hound::Error| WaveformError::Load {
        path: path.to_path_buf(),
        source,
    };

    let reader = WavReader::open(path).map_err(load_err)?;
    let spec = reader.spec();
    log::debug!("Opened {} ({:?})", path.display(), spec);

    if spec.channels != 2 {
        return Err(WaveformError::ChannelCount(spec.channels));
    }
    if spec.sample_rate == 0 {
        return Err(WaveformError::InvalidConfig("sample rate must be positive"));
    }

    let interleaved: Vec<f64> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, 8 | 16 | 24 | 32) => reader
            .into_samples::<i32>()
            .map(|s| s.map(|v| v as f64))
            .collect::<std::result::Result<_, _>>()
            .map_err(load_err)?,
        (SampleFormat::Float, 32) => reader
            .into_samples::<f32>()
            .map(|s| s.map(|v| v as f64))
            .collect::<std::result::Result<_, _>>()
            .map_err(load_err)?,
        (format, bits) => {
            let format = match format {
                SampleFormat::Int => "integer PCM",
                SampleFormat::Float => "float",
            };
            return Err(WaveformError::UnsupportedEncoding { bits, format });
        }
    };

    let frames = interleaved.len() / 2;
    let mut i = Vec::with_capacity(frames);
    let mut q = Vec::with_capacity(frames);
    for frame in interleaved.chunks_exact(2) {
        i.push(frame[0]);
        q.push(frame[1]);
    }

    Ok(IqRecording {
        sample_rate: spec.sample_rate,
        i,
        q,
    })
}
