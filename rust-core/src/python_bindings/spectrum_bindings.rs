//! Python bindings for spectral analysis

use numpy::{Complex64, IntoPyArray, PyArray1, PyArray2, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::spectrum::{
    self, Octave, OctaveBase, OctaveSubdivision, Scaling, SpectralConfig, SpectralMode, WindowType,
};

/// Window type enum exposed to Python
#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Bartlett,
    Blackman,
    Hanning,
    Sine,
    Rectangular,
}

impl From<PyWindowType> for WindowType {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Bartlett => WindowType::Bartlett,
            PyWindowType::Blackman => WindowType::Blackman,
            PyWindowType::Hanning => WindowType::Hanning,
            PyWindowType::Sine => WindowType::Sine,
            PyWindowType::Rectangular => WindowType::Rectangular,
        }
    }
}

fn parse_scaling(scaling: &str) -> PyResult<Scaling> {
    match scaling {
        "density" => Ok(Scaling::Density),
        "spectrum" => Ok(Scaling::Spectrum),
        other => Err(PyValueError::new_err(format!("Unknown scaling: {}", other))),
    }
}

fn parse_mode(mode: &str) -> PyResult<SpectralMode> {
    match mode {
        "stft" => Ok(SpectralMode::Stft),
        "psd" => Ok(SpectralMode::Psd),
        "magnitude" => Ok(SpectralMode::Magnitude),
        "angle" => Ok(SpectralMode::Angle),
        other => Err(PyValueError::new_err(format!("Unknown mode: {}", other))),
    }
}

fn parse_subdivision(subdivision: &str) -> PyResult<OctaveSubdivision> {
    match subdivision {
        "full" => Ok(OctaveSubdivision::Full),
        "first_half" => Ok(OctaveSubdivision::FirstHalf),
        "second_half" => Ok(OctaveSubdivision::SecondHalf),
        "first_third" => Ok(OctaveSubdivision::FirstThird),
        "second_third" => Ok(OctaveSubdivision::SecondThird),
        "third_third" => Ok(OctaveSubdivision::ThirdThird),
        other => Err(PyValueError::new_err(format!("Unknown subdivision: {}", other))),
    }
}

/// Forward complex FFT (unnormalized)
#[pyfunction]
fn fft<'py>(py: Python<'py>, signal: PyReadonlyArray1<Complex64>) -> PyResult<&'py PyArray1<Complex64>> {
    let spectrum = spectrum::fft(signal.as_slice()?)?;
    Ok(PyArray1::from_vec(py, spectrum))
}

/// Inverse complex FFT (normalized by 1/N)
#[pyfunction]
fn ifft<'py>(py: Python<'py>, spectrum: PyReadonlyArray1<Complex64>) -> PyResult<&'py PyArray1<Complex64>> {
    let signal = spectrum::ifft(spectrum.as_slice()?)?;
    Ok(PyArray1::from_vec(py, signal))
}

/// Real-input FFT returning N/2 + 1 bins
#[pyfunction]
fn rfft<'py>(py: Python<'py>, signal: PyReadonlyArray1<f64>) -> PyResult<&'py PyArray1<Complex64>> {
    let spectrum = spectrum::rfft(signal.as_slice()?)?;
    Ok(PyArray1::from_vec(py, spectrum))
}

/// Inverse of rfft, returning 2*(M-1) samples
#[pyfunction]
fn irfft<'py>(py: Python<'py>, spectrum: PyReadonlyArray1<Complex64>) -> PyResult<&'py PyArray1<f64>> {
    let signal = spectrum::irfft(spectrum.as_slice()?)?;
    Ok(PyArray1::from_vec(py, signal))
}

#[pyfunction]
#[pyo3(signature = (n, spacing=1.0))]
fn fft_freq(py: Python<'_>, n: usize, spacing: f64) -> &PyArray1<f64> {
    PyArray1::from_vec(py, spectrum::fft_freq(n, spacing))
}

#[pyfunction]
#[pyo3(signature = (n, spacing=1.0))]
fn rfft_freq(py: Python<'_>, n: usize, spacing: f64) -> &PyArray1<f64> {
    PyArray1::from_vec(py, spectrum::rfft_freq(n, spacing))
}

#[pyfunction]
fn generate_kernel_1d(py: Python<'_>, window_type: PyWindowType, length: usize) -> &PyArray1<f64> {
    PyArray1::from_vec(py, spectrum::generate_kernel_1d(window_type.into(), length))
}

/// Welch cross-spectral density of a real signal with itself
/// 
/// Args:
///     signal: Real samples
///     window: Window kernel (segment length)
///     sample_rate: Sample rate in Hz
///     noverlap: Overlapping samples (default: half the window)
///     detrend: Subtract each segment's mean
///     onesided: Return DC through Nyquist only
///     scaling: "density" or "spectrum"
#[pyfunction]
#[pyo3(signature = (signal, window, sample_rate=1.0, noverlap=None, detrend=true, onesided=true, scaling="density"))]
#[allow(clippy::too_many_arguments)]
fn csd<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
    window: PyReadonlyArray1<f64>,
    sample_rate: f64,
    noverlap: Option<usize>,
    detrend: bool,
    onesided: bool,
    scaling: &str,
) -> PyResult<&'py PyArray1<f64>> {
    let config = SpectralConfig {
        sample_rate,
        noverlap,
        detrend,
        onesided,
        scaling: parse_scaling(scaling)?,
        ..Default::default()
    };
    let pxx = spectrum::csd(signal.as_slice()?, window.as_slice()?, &config)?;
    Ok(PyArray1::from_vec(py, pxx))
}

/// Short-time spectrogram of a real signal
/// 
/// Returns:
///     Complex matrix, frequency x time (time x frequency when transposed)
#[pyfunction]
#[pyo3(signature = (signal, window, sample_rate=1.0, noverlap=None, detrend=true, onesided=true, scaling="density", mode="psd", transpose=false))]
#[allow(clippy::too_many_arguments)]
fn spectrogram<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
    window: PyReadonlyArray1<f64>,
    sample_rate: f64,
    noverlap: Option<usize>,
    detrend: bool,
    onesided: bool,
    scaling: &str,
    mode: &str,
    transpose: bool,
) -> PyResult<&'py PyArray2<Complex64>> {
    let config = SpectralConfig {
        sample_rate,
        noverlap,
        detrend,
        onesided,
        scaling: parse_scaling(scaling)?,
        mode: parse_mode(mode)?,
        transpose,
    };
    let result = spectrum::spectrogram(signal.as_slice()?, window.as_slice()?, &config)?;
    Ok(result.values.into_pyarray(py))
}

/// Band edges [low, high] of an octave band
/// 
/// Args:
///     center: Nominal center frequency in Hz (31.5, 63, ..., 16000)
///     subdivision: "full", "first_half", "second_half", "first_third", ...
///     base_two: Use G = 2 instead of G = 10^(3/10)
#[pyfunction]
#[pyo3(signature = (center, subdivision="full", base_two=true))]
fn octave_frequency_range(center: f64, subdivision: &str, base_two: bool) -> PyResult<[f64; 2]> {
    let octave = Octave::ALL
        .into_iter()
        .find(|o| (o.nominal_frequency() - center).abs() < 1e-6)
        .ok_or_else(|| PyValueError::new_err(format!("Not a standard octave center: {}", center)))?;
    let base = if base_two { OctaveBase::Base2 } else { OctaveBase::Base10 };
    
    Ok(spectrum::octave_frequency_range(octave, parse_subdivision(subdivision)?, base))
}

pub(super) fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fft, m)?)?;
    m.add_function(wrap_pyfunction!(ifft, m)?)?;
    m.add_function(wrap_pyfunction!(rfft, m)?)?;
    m.add_function(wrap_pyfunction!(irfft, m)?)?;
    m.add_function(wrap_pyfunction!(fft_freq, m)?)?;
    m.add_function(wrap_pyfunction!(rfft_freq, m)?)?;
    m.add_function(wrap_pyfunction!(generate_kernel_1d, m)?)?;
    m.add_function(wrap_pyfunction!(csd, m)?)?;
    m.add_function(wrap_pyfunction!(spectrogram, m)?)?;
    m.add_function(wrap_pyfunction!(octave_frequency_range, m)?)?;
    Ok(())
}
