//! Windowing and detrending of signal segments
//! 
//! Applies windows to time-domain segments before FFT to reduce spectral leakage

use num_complex::Complex64;
use std::ops::{Add, Mul, Sub};

/// Sample type accepted by the spectral estimators (real or complex)
pub trait Sample:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self> + Default
{
    /// Whether the sample carries an imaginary part
    const IS_COMPLEX: bool;
    
    /// Promote to a complex value
    fn to_complex(self) -> Complex64;
    
    /// Real part, used when feeding a real transform
    fn real(self) -> f64;
}

impl Sample for f64 {
    const IS_COMPLEX: bool = false;
    
    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(self, 0.0)
    }
    
    #[inline]
    fn real(self) -> f64 {
        self
    }
}

impl Sample for Complex64 {
    const IS_COMPLEX: bool = true;
    
    #[inline]
    fn to_complex(self) -> Complex64 {
        self
    }
    
    #[inline]
    fn real(self) -> f64 {
        self.re
    }
}

/// Apply window to segment
/// 
/// # Arguments
/// * `segment` - Input samples
/// * `window` - Window coefficients, same length as `segment`
/// 
/// # Returns
/// Windowed segment
pub fn apply_window<T: Sample>(segment: &[T], window: &[f64]) -> Vec<T> {
    segment
        .iter()
        .zip(window.iter())
        .map(|(&s, &w)| s * w)
        .collect()
}

/// Apply window in-place
pub fn apply_window_inplace<T: Sample>(segment: &mut [T], window: &[f64]) {
    for (s, &w) in segment.iter_mut().zip(window.iter()) {
        *s = *s * w;
    }
}

/// Arithmetic mean of the samples (zero for an empty slice)
pub fn mean<T: Sample>(samples: &[T]) -> T {
    if samples.is_empty() {
        return T::default();
    }
    let sum = samples.iter().fold(T::default(), |acc, &s| acc + s);
    sum * (1.0 / samples.len() as f64)
}

/// Subtract the segment mean in-place
pub fn detrend_mean<T: Sample>(segment: &mut [T]) {
    let m = mean(segment);
    for s in segment.iter_mut() {
        *s = *s - m;
    }
}

/// Σ w[n], used by the spectrum scaling
pub fn window_sum(window: &[f64]) -> f64 {
    window.iter().sum()
}

/// Σ w[n]², used by the density scaling
pub fn window_power_sum(window: &[f64]) -> f64 {
    window.iter().map(|&w| w * w).sum()
}
