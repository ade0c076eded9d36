//! Discrete Fourier transforms backed by rustfft and realfft
//! 
//! Complex and real-input transforms of arbitrary length (mixed-radix,
//! Rader and Bluestein plans are picked by the planners), plus the
//! frequency axes that go with them.

use num_complex::Complex64;
use realfft::RealFftPlanner;
use rustfft::FftPlanner;

use crate::error::SpectralError;

/// FFT engine with cached plans
/// 
/// Plans are created on first use for a given length and reused afterwards,
/// so one engine should be kept around when transforming many segments.
pub struct FftEngine {
    /// Complex-to-complex planner
    complex_planner: FftPlanner<f64>,
    
    /// Real-to-complex / complex-to-real planner
    real_planner: RealFftPlanner<f64>,
}

impl Default for FftEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FftEngine {
    /// Create new FFT engine
    pub fn new() -> Self {
        Self {
            complex_planner: FftPlanner::new(),
            real_planner: RealFftPlanner::new(),
        }
    }
    
    /// Forward complex transform, unnormalized
    /// 
    /// # Arguments
    /// * `input` - Complex samples x[n], n = 0..N-1
    /// 
    /// # Returns
    /// X[k] = Σ x[n]·exp(-2πi·kn/N) for k = 0..N-1
    pub fn fft(&mut self, input: &[Complex64]) -> Result<Vec<Complex64>, SpectralError> {
        if input.is_empty() {
            return Err(SpectralError::EmptyInput("signal"));
        }
        
        let plan = self.complex_planner.plan_fft_forward(input.len());
        let mut buffer = input.to_vec();
        plan.process(&mut buffer);
        
        Ok(buffer)
    }
    
    /// Inverse complex transform, normalized by 1/N
    /// 
    /// `ifft(fft(x))` recovers x up to rounding.
    pub fn ifft(&mut self, input: &[Complex64]) -> Result<Vec<Complex64>, SpectralError> {
        if input.is_empty() {
            return Err(SpectralError::EmptyInput("spectrum"));
        }
        
        let plan = self.complex_planner.plan_fft_inverse(input.len());
        let mut buffer = input.to_vec();
        plan.process(&mut buffer);
        
        let scale = 1.0 / input.len() as f64;
        for value in buffer.iter_mut() {
            *value *= scale;
        }
        
        Ok(buffer)
    }
    
    /// Forward transform of a real signal
    /// 
    /// # Arguments
    /// * `input` - Real samples, length N
    /// 
    /// # Returns
    /// Non-redundant half of the spectrum, N/2 + 1 bins (DC through Nyquist)
    pub fn rfft(&mut self, input: &[f64]) -> Result<Vec<Complex64>, SpectralError> {
        if input.is_empty() {
            return Err(SpectralError::EmptyInput("signal"));
        }
        
        let r2c = self.real_planner.plan_fft_forward(input.len());
        let mut scratch_input = input.to_vec();
        let mut spectrum = r2c.make_output_vec();
        r2c.process(&mut scratch_input, &mut spectrum)?;
        
        Ok(spectrum)
    }
    
    /// Inverse of [`FftEngine::rfft`], normalized by 1/N
    /// 
    /// # Arguments
    /// * `input` - Half spectrum with M bins, Hermitian symmetry implied
    /// 
    /// # Returns
    /// Real signal of length 2·(M-1). A single-bin input yields an empty
    /// signal. The imaginary parts of the DC and last bin are ignored.
    pub fn irfft(&mut self, input: &[Complex64]) -> Result<Vec<f64>, SpectralError> {
        if input.is_empty() {
            return Err(SpectralError::EmptyInput("spectrum"));
        }
        if input.len() == 1 {
            return Ok(Vec::new());
        }
        
        let length = 2 * (input.len() - 1);
        let c2r = self.real_planner.plan_fft_inverse(length);
        
        let mut spectrum = input.to_vec();
        spectrum[0].im = 0.0;
        if let Some(last) = spectrum.last_mut() {
            last.im = 0.0;
        }
        
        let mut output = c2r.make_output_vec();
        c2r.process(&mut spectrum, &mut output)?;
        
        let scale = 1.0 / length as f64;
        for value in output.iter_mut() {
            *value *= scale;
        }
        
        Ok(output)
    }
}

/// Forward complex transform with a throwaway engine
pub fn fft(input: &[Complex64]) -> Result<Vec<Complex64>, SpectralError> {
    FftEngine::new().fft(input)
}

/// Inverse complex transform with a throwaway engine
pub fn ifft(input: &[Complex64]) -> Result<Vec<Complex64>, SpectralError> {
    FftEngine::new().ifft(input)
}

/// Real forward transform with a throwaway engine
pub fn rfft(input: &[f64]) -> Result<Vec<Complex64>, SpectralError> {
    FftEngine::new().rfft(input)
}

/// Real inverse transform with a throwaway engine
pub fn irfft(input: &[Complex64]) -> Result<Vec<f64>, SpectralError> {
    FftEngine::new().irfft(input)
}

/// Sample frequencies of a full complex transform
/// 
/// # Arguments
/// * `n` - Transform length
/// * `spacing` - Sample spacing (inverse of the sample rate)
/// 
/// # Returns
/// Positive frequencies in ascending order followed by the negative ones,
/// wrapping at ceil(n/2): `[0, 1, ..., ceil(n/2)-1, -floor(n/2), ..., -1] / (n·spacing)`
pub fn fft_freq(n: usize, spacing: f64) -> Vec<f64> {
    let denominator = n as f64 * spacing;
    let split = n.div_ceil(2);
    
    (0..n)
        .map(|k| {
            if k < split {
                k as f64 / denominator
            } else {
                (k as f64 - n as f64) / denominator
            }
        })
        .collect()
}

/// Sample frequencies of a real transform: n/2 + 1 bins, DC to Nyquist
pub fn rfft_freq(n: usize, spacing: f64) -> Vec<f64> {
    let denominator = n as f64 * spacing;
    (0..n / 2 + 1).map(|k| k as f64 / denominator).collect()
}
