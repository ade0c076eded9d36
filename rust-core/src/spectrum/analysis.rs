//! Welch cross-spectral density and short-time Fourier spectrograms
//! 
//! Both estimators share one segmentation pipeline:
//! split → detrend → window → FFT → scale. `csd` averages the per-segment
//! periodograms, `spectrogram` keeps them as columns of a time-frequency matrix.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

use super::fft::{fft_freq, rfft_freq, FftEngine};
use super::windowing::{apply_window_inplace, detrend_mean, window_power_sum, window_sum, Sample};
use crate::error::SpectralError;

/// Normalization applied to the periodograms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    /// Power spectral density, V²/Hz: divide by fs·Σw²
    Density,
    
    /// Power spectrum, V²: divide by (Σw)²
    Spectrum,
}

/// Quantity stored in each spectrogram cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectralMode {
    /// Complex short-time Fourier transform
    Stft,
    
    /// Power spectral density (|X|², one-sided bins doubled)
    Psd,
    
    /// Magnitude |X|
    Magnitude,
    
    /// Phase angle of X in radians
    Angle,
}

/// Spectral estimator configuration
#[derive(Debug, Clone)]
pub struct SpectralConfig {
    /// Sample rate in Hz
    pub sample_rate: f64,
    
    /// Samples shared by consecutive segments (None = half the window)
    pub noverlap: Option<usize>,
    
    /// Subtract each segment's mean before windowing
    pub detrend: bool,
    
    /// Return only DC through Nyquist (ignored for complex signals)
    pub onesided: bool,
    
    /// Periodogram normalization
    pub scaling: Scaling,
    
    /// Spectrogram cell content
    pub mode: SpectralMode,
    
    /// Lay the spectrogram out as time × frequency instead of frequency × time
    pub transpose: bool,
}

impl Default for SpectralConfig {
    fn default() -> Self {
        Self {
            sample_rate: 1.0,
            noverlap: None,
            detrend: true,
            onesided: true,
            scaling: Scaling::Density,
            mode: SpectralMode::Psd,
            transpose: false,
        }
    }
}

/// Time-frequency matrix produced by [`spectrogram`]
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrogram {
    /// Values laid out frequency × time (or time × frequency when transposed)
    pub values: Array2<Complex64>,
    
    /// Frequency of each bin in Hz
    pub frequencies: Vec<f64>,
    
    /// Center time of each segment in seconds
    pub times: Vec<f64>,
}

impl Spectrogram {
    /// [rows, cols] of the value matrix
    pub fn shape(&self) -> [usize; 2] {
        let (rows, cols) = self.values.dim();
        [rows, cols]
    }
    
    /// Values in row-major order
    pub fn flattened(&self) -> Vec<Complex64> {
        self.values.iter().copied().collect()
    }
}

/// Validated segmentation parameters
struct Segmentation {
    nperseg: usize,
    step: usize,
    count: usize,
    onesided: bool,
}

fn plan_segments<T: Sample>(
    signal: &[T],
    window: &[f64],
    config: &SpectralConfig,
) -> Result<Segmentation, SpectralError> {
    if signal.is_empty() {
        return Err(SpectralError::EmptyInput("signal"));
    }
    if window.is_empty() {
        return Err(SpectralError::EmptyInput("window"));
    }
    if !(config.sample_rate.is_finite() && config.sample_rate > 0.0) {
        return Err(SpectralError::InvalidSampleRate(config.sample_rate));
    }
    
    let nperseg = window.len();
    if nperseg > signal.len() {
        return Err(SpectralError::WindowLongerThanSignal {
            window: nperseg,
            signal: signal.len(),
        });
    }
    
    let noverlap = config.noverlap.unwrap_or(nperseg / 2);
    if noverlap >= nperseg {
        return Err(SpectralError::InvalidOverlap {
            noverlap,
            window: nperseg,
        });
    }
    
    let onesided = config.onesided && !T::IS_COMPLEX;
    if config.onesided && T::IS_COMPLEX {
        debug!("complex input, computing two-sided spectrum");
    }
    
    let step = nperseg - noverlap;
    let count = (signal.len() - nperseg) / step + 1;
    
    Ok(Segmentation {
        nperseg,
        step,
        count,
        onesided,
    })
}

/// Scaled per-segment spectra, frequency × time
fn segment_spectra<T: Sample>(
    engine: &mut FftEngine,
    signal: &[T],
    window: &[f64],
    config: &SpectralConfig,
    mode: SpectralMode,
    plan: &Segmentation,
) -> Result<Array2<Complex64>, SpectralError> {
    let nfft = plan.nperseg;
    let num_freqs = if plan.onesided { nfft / 2 + 1 } else { nfft };
    
    let scale = match config.scaling {
        Scaling::Density => 1.0 / (config.sample_rate * window_power_sum(window)),
        Scaling::Spectrum => 1.0 / window_sum(window).powi(2),
    };
    
    let mut result = Array2::<Complex64>::zeros((num_freqs, plan.count));
    let mut segment = vec![T::default(); nfft];
    
    for t in 0..plan.count {
        let start = t * plan.step;
        segment.copy_from_slice(&signal[start..start + nfft]);
        
        if config.detrend {
            detrend_mean(&mut segment);
        }
        apply_window_inplace(&mut segment, window);
        
        let spectrum = if plan.onesided {
            let real: Vec<f64> = segment.iter().map(|s| s.real()).collect();
            engine.rfft(&real)?
        } else {
            let complex: Vec<Complex64> = segment.iter().map(|s| s.to_complex()).collect();
            engine.fft(&complex)?
        };
        
        for (k, x) in spectrum.iter().enumerate() {
            result[[k, t]] = match mode {
                SpectralMode::Stft => *x * scale.sqrt(),
                SpectralMode::Magnitude => Complex64::new(x.norm() * scale.sqrt(), 0.0),
                SpectralMode::Angle => Complex64::new(x.arg(), 0.0),
                SpectralMode::Psd => {
                    let mut power = x.norm_sqr() * scale;
                    // Fold the mirrored negative-frequency energy onto the positive bin
                    let is_nyquist = nfft % 2 == 0 && k == nfft / 2;
                    if plan.onesided && k != 0 && !is_nyquist {
                        power *= 2.0;
                    }
                    Complex64::new(power, 0.0)
                }
            };
        }
    }
    
    Ok(result)
}

fn segment_frequencies(nfft: usize, sample_rate: f64, onesided: bool) -> Vec<f64> {
    if onesided {
        rfft_freq(nfft, 1.0 / sample_rate)
    } else {
        fft_freq(nfft, 1.0 / sample_rate)
    }
}

/// Cross-spectral density of a signal with itself (Welch's method)
/// 
/// # Arguments
/// * `signal` - Real or complex samples
/// * `window` - Window kernel; its length is the segment length and FFT size
/// * `config` - Sample rate, overlap, detrending, sidedness and scaling
/// 
/// # Returns
/// Averaged periodogram, nperseg/2 + 1 bins when one-sided, nperseg bins
/// otherwise (always two-sided for complex signals). `config.mode` is ignored.
pub fn csd<T: Sample>(
    signal: &[T],
    window: &[f64],
    config: &SpectralConfig,
) -> Result<Vec<f64>, SpectralError> {
    csd_with_engine(&mut FftEngine::new(), signal, window, config)
}

/// [`csd`] reusing the plans cached in `engine`
pub fn csd_with_engine<T: Sample>(
    engine: &mut FftEngine,
    signal: &[T],
    window: &[f64],
    config: &SpectralConfig,
) -> Result<Vec<f64>, SpectralError> {
    let plan = plan_segments(signal, window, config)?;
    let spectra = segment_spectra(engine, signal, window, config, SpectralMode::Psd, &plan)?;
    
    let inv_count = 1.0 / plan.count as f64;
    Ok(spectra
        .rows()
        .into_iter()
        .map(|row| row.iter().map(|c| c.re).sum::<f64>() * inv_count)
        .collect())
}

/// Frequencies matching the bins returned by [`csd`] for the same inputs
pub fn csd_frequencies<T: Sample>(window_length: usize, config: &SpectralConfig) -> Vec<f64> {
    segment_frequencies(
        window_length,
        config.sample_rate,
        config.onesided && !T::IS_COMPLEX,
    )
}

/// Short-time Fourier spectrogram
/// 
/// Same segmentation as [`csd`], but segments are not averaged: each one
/// becomes a column of the result. `config.mode` selects the cell content.
pub fn spectrogram<T: Sample>(
    signal: &[T],
    window: &[f64],
    config: &SpectralConfig,
) -> Result<Spectrogram, SpectralError> {
    spectrogram_with_engine(&mut FftEngine::new(), signal, window, config)
}

/// [`spectrogram`] reusing the plans cached in `engine`
pub fn spectrogram_with_engine<T: Sample>(
    engine: &mut FftEngine,
    signal: &[T],
    window: &[f64],
    config: &SpectralConfig,
) -> Result<Spectrogram, SpectralError> {
    let plan = plan_segments(signal, window, config)?;
    let spectra = segment_spectra(engine, signal, window, config, config.mode, &plan)?;
    
    let values = if config.transpose {
        spectra.reversed_axes().as_standard_layout().into_owned()
    } else {
        spectra
    };
    
    let half = plan.nperseg as f64 / 2.0;
    let times = (0..plan.count)
        .map(|t| (t * plan.step) as f64 + half)
        .map(|center| center / config.sample_rate)
        .collect();
    
    Ok(Spectrogram {
        values,
        frequencies: segment_frequencies(plan.nperseg, config.sample_rate, plan.onesided),
        times,
    })
}
