//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::{GridError, SpectralError};

mod spectrum_bindings;
mod grid_bindings;

impl From<SpectralError> for PyErr {
    fn from(err: SpectralError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

impl From<GridError> for PyErr {
    fn from(err: GridError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn mesh_spectra(_py: Python, m: &PyModule) -> PyResult<()> {
    spectrum_bindings::register(m)?;
    m.add_class::<spectrum_bindings::PyWindowType>()?;
    m.add_class::<grid_bindings::PyExplicitStructuredGrid>()?;
    
    Ok(())
}
