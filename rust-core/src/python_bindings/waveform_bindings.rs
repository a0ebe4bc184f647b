//! Python bindings for waveform loading and its spectral arrays

use pyo3::prelude::*;
use pyo3::exceptions::{PyIOError, PyValueError};
use numpy::{PyArray1, PyArray2, ToPyArray};
use num_complex::Complex64;
use std::path::PathBuf;
use crate::error::WaveformError;
use crate::spectrum::view;
use crate::waveform::{Waveform, WaveformConfig, STEP, WINDOW_LENGTH};

fn to_py_err(err: WaveformError) -> PyErr {
    if err.is_load_error() {
        PyIOError::new_err(err.to_string())
    } else {
        PyValueError::new_err(err.to_string())
    }
}

/// Analyzed IQ recording exposed to Python
#[pyclass(name = "Waveform")]
pub struct PyWaveform {
    waveform: Waveform,
}

#[pymethods]
impl PyWaveform {
    /// Load and analyze a two-channel WAV recording
    ///
    /// Args:
    ///     path: Path to the WAV file (channel 0 = I, channel 1 = Q)
    ///     window_length: Samples per FFT window (default: 1024)
    ///     step: Sample advance between windows (default: 2048)
    ///
    /// Raises:
    ///     OSError: File missing, unreadable, not two-channel or unsupported encoding
    ///     ValueError: Silent recording, recording shorter than one window, bad parameters
    #[new]
    #[pyo3(signature = (path, window_length=WINDOW_LENGTH, step=STEP))]
    fn new(path: PathBuf, window_length: usize, step: usize) -> PyResult<Self> {
        let config = WaveformConfig { window_length, step };
        let waveform = Waveform::load(&path, config).map_err(to_py_err)?;
        Ok(Self { waveform })
    }

    fn __len__(&self) -> usize {
        self.waveform.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Waveform({} samples @ {} Hz, {} windows)",
            self.waveform.len(),
            self.waveform.sample_rate(),
            self.waveform.num_windows()
        )
    }

    /// Sample rate in Hz
    #[getter]
    fn sample_rate(&self) -> u32 {
        self.waveform.sample_rate()
    }

    /// Recording length in seconds
    #[getter]
    fn duration(&self) -> f64 {
        self.waveform.duration()
    }

    #[getter]
    fn window_length(&self) -> usize {
        self.waveform.window_length()
    }

    #[getter]
    fn step(&self) -> usize {
        self.waveform.step()
    }

    /// Normalized complex samples (I - jQ) as complex128 array
    #[getter]
    fn samples<'py>(&self, py: Python<'py>) -> &'py PyArray1<Complex64> {
        self.waveform.samples().to_pyarray(py)
    }

    /// Window start times in seconds
    #[getter]
    fn t<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        self.waveform.t().to_pyarray(py)
    }

    /// Bin frequencies in Hz, unshifted FFT order
    #[getter]
    fn f<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        self.waveform.f().to_pyarray(py)
    }

    /// Complex spectrogram, shape (num_windows, window_length)
    #[getter]
    fn spectrogram<'py>(&self, py: Python<'py>) -> &'py PyArray2<Complex64> {
        self.waveform.spectrogram().to_pyarray(py)
    }

    /// Complex mean of the spectrogram over time, shape (window_length,)
    #[getter]
    fn psd<'py>(&self, py: Python<'py>) -> &'py PyArray1<Complex64> {
        self.waveform.psd().to_pyarray(py)
    }

    /// Mean power |X|^2 per bin (not stored; computed on request)
    fn psd_power<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        let power = crate::spectrum::PsdEstimator::estimate_power(self.waveform.spectrogram())
            .map_err(to_py_err)?;
        Ok(PyArray1::from_owned_array(py, power))
    }

    /// Frequency axis in ascending, centered order
    fn shifted_frequencies<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_vec(py, view::shifted_frequencies(self.waveform.f()))
    }

    /// Spectrogram magnitude with centered frequency axis
    fn spectrogram_magnitude_shifted<'py>(&self, py: Python<'py>) -> &'py PyArray2<f64> {
        let magnitude = view::spectrogram_magnitude_shifted(self.waveform.spectrogram());
        PyArray2::from_owned_array(py, magnitude)
    }

    /// PSD magnitude with centered frequency axis
    fn psd_magnitude_shifted<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_vec(py, view::psd_magnitude_shifted(self.waveform.psd()))
    }

    /// Index range (start, stop) of the centered axis within +/- bandwidth/2
    ///
    /// Args:
    ///     bandwidth_hz: Total displayed bandwidth in Hz
    fn band_range(&self, bandwidth_hz: f64) -> (usize, usize) {
        let shifted = view::shifted_frequencies(self.waveform.f());
        let range = view::band_range(&shifted, bandwidth_hz);
        (range.start, range.end)
    }

    /// Selectable display bandwidth (min_hz, max_hz)
    fn bandwidth_limits(&self) -> (f64, f64) {
        view::bandwidth_limits(self.waveform.sample_rate() as f64)
    }
}

/// Load a recording
///
/// Args:
///     path: Path to the two-channel WAV file
///     window_length: Samples per FFT window (default: 1024)
///     step: Sample advance between windows (default: 2048)
#[pyfunction]
#[pyo3(signature = (path, window_length=WINDOW_LENGTH, step=STEP))]
pub fn load(path: PathBuf, window_length: usize, step: usize) -> PyResult<PyWaveform> {
    PyWaveform::new(path, window_length, step)
}
