//! Immutable IQ waveform with its derived spectral arrays
//!
//! Everything is computed once by the factory functions; a `Waveform` either
//! exists fully formed or construction fails with a [`WaveformError`].

use crate::error::{Result, WaveformError};
use crate::iq::{combine_channels, normalize_l2, read_iq_wav};
use crate::spectrum::{fft_frequencies, time_axis, PsdEstimator, SpectrogramEngine};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use num_complex::Complex64;
use std::path::Path;

/// Default samples per analysis window
pub const WINDOW_LENGTH: usize = 1024;

/// Default sample advance between windows
pub const STEP: usize = 2 * WINDOW_LENGTH;

/// Analysis configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveformConfig {
    /// Samples per analysis window (FFT size)
    pub window_length: usize,

    /// Sample advance between consecutive windows; larger than
    /// `window_length` leaves gaps, smaller overlaps
    pub step: usize,
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self {
            window_length: WINDOW_LENGTH,
            step: STEP,
        }
    }
}

impl WaveformConfig {
    pub fn validate(&self) -> Result<()> {
        if self.window_length == 0 {
            return Err(WaveformError::InvalidConfig("window length must be positive"));
        }
        if self.step == 0 {
            return Err(WaveformError::InvalidConfig("step must be positive"));
        }
        Ok(())
    }
}

/// Normalized IQ samples plus spectrogram, PSD and axes
#[derive(Debug, Clone)]
pub struct Waveform {
    samples: Vec<Complex64>,
    sample_rate: u32,
    config: WaveformConfig,
    spectrogram: Array2<Complex64>,
    psd: Array1<Complex64>,
    t: Vec<f64>,
    f: Vec<f64>,
}

/// Load a recording with the default window length and step
pub fn load(path: impl AsRef<Path>) -> Result<Waveform> {
    Waveform::load(path, WaveformConfig::default())
}

impl Waveform {
    /// Read a two-channel WAV file and analyze it
    pub fn load(path: impl AsRef<Path>, config: WaveformConfig) -> Result<Self> {
        let recording = read_iq_wav(path.as_ref())?;
        Self::from_channels(recording.sample_rate, &recording.i, &recording.q, config)
    }

    /// Build from separate in-phase and quadrature channels
    pub fn from_channels(
        sample_rate: u32,
        i: &[f64],
        q: &[f64],
        config: WaveformConfig,
    ) -> Result<Self> {
        Self::from_samples(sample_rate, combine_channels(i, q), config)
    }

    /// Build from complex samples, normalizing them to unit L2 norm
    ///
    /// # Errors
    /// * `InvalidConfig` - zero sample rate, window length or step
    /// * `DegenerateSignal` - all-zero (or empty) signal
    /// * `EmptySpectrogram` - fewer samples than one window
    pub fn from_samples(
        sample_rate: u32,
        mut samples: Vec<Complex64>,
        config: WaveformConfig,
    ) -> Result<Self> {
        config.validate()?;
        if sample_rate == 0 {
            return Err(WaveformError::InvalidConfig("sample rate must be positive"));
        }

        normalize_l2(&mut samples)?;

        let mut engine = SpectrogramEngine::new(config.window_length);
        let spectrogram = engine.compute(&samples, config.step);
        let psd = PsdEstimator::estimate(spectrogram.view())?;

        let rate = sample_rate as f64;
        let t = time_axis(spectrogram.nrows(), config.step, rate);
        let f = fft_frequencies(config.window_length, rate);

        log::debug!(
            "Waveform: {} samples @ {} Hz, {} windows of {} (step {})",
            samples.len(),
            sample_rate,
            spectrogram.nrows(),
            config.window_length,
            config.step
        );

        Ok(Self {
            samples,
            sample_rate,
            config,
            spectrogram,
            psd,
            t,
            f,
        })
    }

    /// Number of complex samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false for a constructed waveform (empty signals are degenerate)
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Recording length in seconds
    pub fn duration(&self) -> f64 {
        self.len() as f64 / self.sample_rate as f64
    }

    /// Normalized samples, `I - jQ`
    pub fn samples(&self) -> &[Complex64] {
        &self.samples
    }

    pub fn config(&self) -> WaveformConfig {
        self.config
    }

    pub fn window_length(&self) -> usize {
        self.config.window_length
    }

    pub fn step(&self) -> usize {
        self.config.step
    }

    /// Number of spectrogram rows
    pub fn num_windows(&self) -> usize {
        self.spectrogram.nrows()
    }

    /// Window start times in seconds, one per spectrogram row
    pub fn t(&self) -> &[f64] {
        &self.t
    }

    /// Bin frequencies in Hz, natural (unshifted) FFT order
    pub fn f(&self) -> &[f64] {
        &self.f
    }

    /// `[num_windows][window_length]` complex spectra
    pub fn spectrogram(&self) -> ArrayView2<'_, Complex64> {
        self.spectrogram.view()
    }

    /// Complex mean of the spectrogram over time, one value per bin
    pub fn psd(&self) -> ArrayView1<'_, Complex64> {
        self.psd.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iq::normalize::l2_norm;
    use hound::{SampleFormat, WavSpec, WavWriter};
    use std::f64::consts::PI;

    fn config(window_length: usize, step: usize) -> WaveformConfig {
        WaveformConfig { window_length, step }
    }

    fn tone(len: usize, cycles_per_sample: f64) -> (Vec<f64>, Vec<f64>) {
        (0..len)
            .map(|n| {
                let phase = 2.0 * PI * cycles_per_sample * n as f64;
                (phase.cos(), -phase.sin())
            })
            .unzip()
    }

    fn write_iq_wav(path: &Path, i: &[f64], q: &[f64], sample_rate: u32) {
        let spec = WavSpec {
            channels: 2,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for (&re, &im) in i.iter().zip(q.iter()) {
            writer.write_sample((re * 16000.0) as i16).unwrap();
            writer.write_sample((im * 16000.0) as i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_default_config() {
        let config = WaveformConfig::default();
        assert_eq!(config.window_length, 1024);
        assert_eq!(config.step, 2048);
    }

    #[test]
    fn test_four_sample_scenario() {
        let i = [1.0, 0.0, 1.0, 0.0];
        let q = [0.0, 1.0, 0.0, 1.0];
        let wf = Waveform::from_channels(4, &i, &q, config(4, 4)).unwrap();

        let expected_samples = [
            Complex64::new(0.5, 0.0),
            Complex64::new(0.0, -0.5),
            Complex64::new(0.5, 0.0),
            Complex64::new(0.0, -0.5),
        ];
        assert_eq!(wf.samples(), &expected_samples);

        let expected_row = [
            Complex64::new(1.0, -1.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 1.0),
            Complex64::new(0.0, 0.0),
        ];
        assert_eq!(wf.spectrogram().dim(), (1, 4));
        for (got, want) in wf.spectrogram().row(0).iter().zip(expected_row.iter()) {
            assert!((got - want).norm() < 1e-12);
        }

        assert_eq!(wf.psd(), wf.spectrogram().row(0));
        assert_eq!(wf.t(), &[0.0]);
        assert_eq!(wf.f(), &[0.0, 1.0, -2.0, -1.0]);
    }

    #[test]
    fn test_shape_and_normalization() {
        let (i, q) = tone(5000, 0.1);
        let wf = Waveform::from_channels(48000, &i, &q, config(256, 300)).unwrap();

        assert_eq!(wf.len(), 5000);
        assert!((l2_norm(wf.samples()) - 1.0).abs() < 1e-12);
        assert_eq!(wf.num_windows(), (5000 - 256) / 300 + 1);
        assert_eq!(wf.t().len(), wf.num_windows());
        assert_eq!(wf.f().len(), 256);
        assert_eq!(wf.psd().len(), 256);
        assert!((wf.duration() - 5000.0 / 48000.0).abs() < 1e-15);
    }

    #[test]
    fn test_psd_length_independent_of_step() {
        let (i, q) = tone(4096, 0.05);
        for step in [1, 64, 512, 5000] {
            let wf = Waveform::from_channels(1000, &i, &q, config(128, step)).unwrap();
            assert_eq!(wf.psd().len(), 128);
        }
    }

    #[test]
    fn test_tone_peak_bin() {
        // I - jQ of (cos, -sin) is e^{+j 2π f n}; 0.125 cycles/sample -> bin 8 of 64
        let (i, q) = tone(1024, 0.125);
        let wf = Waveform::from_channels(64, &i, &q, config(64, 64)).unwrap();

        let (peak, _) = wf
            .psd()
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.norm().partial_cmp(&b.norm()).unwrap())
            .unwrap();
        assert_eq!(peak, 8);
        assert_eq!(wf.f()[peak], 8.0);
    }

    #[test]
    fn test_window_boundary() {
        let (i, q) = tone(64, 0.1);
        let wf = Waveform::from_channels(8, &i, &q, config(64, 128)).unwrap();
        assert_eq!(wf.num_windows(), 1);

        let err = Waveform::from_channels(8, &i[..63], &q[..63], config(64, 128)).unwrap_err();
        assert!(matches!(err, WaveformError::EmptySpectrogram { window_length: 64 }));
    }

    #[test]
    fn test_short_signal_is_empty_spectrogram() {
        let err = Waveform::from_channels(8, &[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0], config(4, 4))
            .unwrap_err();
        assert!(matches!(err, WaveformError::EmptySpectrogram { .. }));
    }

    #[test]
    fn test_silence_is_degenerate() {
        let zeros = vec![0.0; 2048];
        let err = Waveform::from_channels(8, &zeros, &zeros, config(16, 16)).unwrap_err();
        assert!(matches!(err, WaveformError::DegenerateSignal));
    }

    #[test]
    fn test_invalid_config() {
        let (i, q) = tone(64, 0.1);
        assert!(matches!(
            Waveform::from_channels(8, &i, &q, config(0, 4)),
            Err(WaveformError::InvalidConfig(_))
        ));
        assert!(matches!(
            Waveform::from_channels(8, &i, &q, config(4, 0)),
            Err(WaveformError::InvalidConfig(_))
        ));
        assert!(matches!(
            Waveform::from_channels(0, &i, &q, config(4, 4)),
            Err(WaveformError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_from_file_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let (i, q) = tone(3000, 0.2);
        write_iq_wav(&path, &i, &q, 8000);

        let a = Waveform::load(&path, config(128, 100)).unwrap();
        let b = Waveform::load(&path, config(128, 100)).unwrap();

        assert_eq!(a.len(), 3000);
        assert_eq!(a.sample_rate(), 8000);
        assert_eq!(a.spectrogram(), b.spectrogram());
        assert_eq!(a.psd(), b.psd());
        assert!((a.t()[1] - 100.0 / 8000.0).abs() < 1e-15);
    }

    #[test]
    fn test_load_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.wav");
        let (i, q) = tone(10_000, 0.01);
        write_iq_wav(&path, &i, &q, 48000);

        let wf = load(&path).unwrap();
        assert_eq!(wf.window_length(), WINDOW_LENGTH);
        assert_eq!(wf.step(), STEP);
        assert_eq!(wf.num_windows(), (10_000 - 1024) / 2048 + 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load("/nonexistent/recording.wav").unwrap_err();
        assert!(err.is_load_error());
    }

    #[test]
    fn test_waveform_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Waveform>();
    }
}
