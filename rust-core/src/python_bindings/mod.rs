//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod waveform_bindings;

/// Python module definition
#[pymodule]
fn spectra_analysis(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<waveform_bindings::PyWaveform>()?;
    m.add_function(wrap_pyfunction!(waveform_bindings::load, m)?)?;

    m.add("WINDOW_LENGTH", crate::waveform::WINDOW_LENGTH)?;
    m.add("STEP", crate::waveform::STEP)?;

    Ok(())
}
