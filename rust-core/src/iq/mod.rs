//! IQ recording input: WAV decoding and sample preparation

pub mod loader;
pub mod normalize;

pub use loader::{read_iq_wav, IqRecording};
pub use normalize::{combine_channels, normalize_l2};
