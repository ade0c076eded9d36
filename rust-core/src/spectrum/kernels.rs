//! Window kernels for spectral estimation
//! 
//! Symmetric windows evaluated at x = i/(N-1), matching the values the
//! common scientific Python windows produce for the same lengths.

use ndarray::{Array2, Array3};
use std::f64::consts::PI;

/// Window generator: evaluates the window at `index` for a kernel of `size` samples
pub type WindowGenerator = fn(f64, usize) -> f64;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowType {
    /// Triangular window: w[n] = 1 - |2n/(N-1) - 1|
    Bartlett,
    
    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/(N-1)) + 0.08*cos(4πn/(N-1))
    Blackman,
    
    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(N-1))
    Hanning,
    
    /// Sine window: w[n] = sin(πn/(N-1))
    Sine,
    
    /// Rectangular window (no windowing)
    Rectangular,
}

impl WindowType {
    /// Generator function for this window
    pub fn generator(self) -> WindowGenerator {
        match self {
            WindowType::Bartlett => bartlett,
            WindowType::Blackman => blackman,
            WindowType::Hanning => hanning,
            WindowType::Sine => sine,
            WindowType::Rectangular => rectangular,
        }
    }
}

/// Position of `index` inside the kernel, normalized to [0, 1]
#[inline]
fn normalized_position(index: f64, size: usize) -> f64 {
    if size <= 1 {
        0.5
    } else {
        index / (size - 1) as f64
    }
}

pub fn bartlett(index: f64, size: usize) -> f64 {
    1.0 - (2.0 * normalized_position(index, size) - 1.0).abs()
}

pub fn blackman(index: f64, size: usize) -> f64 {
    let x = normalized_position(index, size);
    0.42 - 0.5 * (2.0 * PI * x).cos() + 0.08 * (4.0 * PI * x).cos()
}

pub fn hanning(index: f64, size: usize) -> f64 {
    0.5 - 0.5 * (2.0 * PI * normalized_position(index, size)).cos()
}

pub fn sine(index: f64, size: usize) -> f64 {
    (PI * normalized_position(index, size)).sin()
}

pub fn rectangular(_index: f64, _size: usize) -> f64 {
    1.0
}

/// Fill `kernel` with `generator` evaluated at every index
/// 
/// A single-sample kernel is always `[1.0]`.
pub fn fill_kernel_1d(kernel: &mut [f64], generator: WindowGenerator) {
    let size = kernel.len();
    if size == 1 {
        kernel[0] = 1.0;
        return;
    }
    
    for (i, value) in kernel.iter_mut().enumerate() {
        *value = generator(i as f64, size);
    }
}

/// Generate window coefficients
/// 
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (N)
/// 
/// # Returns
/// Vector of window coefficients w[n] for n = 0..N-1
pub fn generate_kernel_1d(window_type: WindowType, length: usize) -> Vec<f64> {
    let mut kernel = vec![0.0; length];
    fill_kernel_1d(&mut kernel, window_type.generator());
    kernel
}

/// Separable 2-D kernel: k[i][j] = w_rows[i]·w_cols[j]
pub fn generate_kernel_2d(window_type: WindowType, rows: usize, cols: usize) -> Array2<f64> {
    let wr = generate_kernel_1d(window_type, rows);
    let wc = generate_kernel_1d(window_type, cols);
    Array2::from_shape_fn((rows, cols), |(i, j)| wr[i] * wc[j])
}

/// Separable 3-D kernel: k[i][j][l] = w_x[i]·w_y[j]·w_z[l]
pub fn generate_kernel_3d(window_type: WindowType, shape: [usize; 3]) -> Array3<f64> {
    let wx = generate_kernel_1d(window_type, shape[0]);
    let wy = generate_kernel_1d(window_type, shape[1]);
    let wz = generate_kernel_1d(window_type, shape[2]);
    Array3::from_shape_fn((shape[0], shape[1], shape[2]), |(i, j, l)| wx[i] * wy[j] * wz[l])
}

#[cfg(test)]
mod tests {
    use super::*;
    
    fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
            assert!((a - e).abs() < tol, "index {}: {} vs {}", i, a, e);
        }
    }
    
    #[test]
    fn test_bartlett_reference_values() {
        let window = generate_kernel_1d(WindowType::Bartlett, 10);
        let expected = [
            0.0, 0.222222, 0.444444, 0.666667, 0.888889,
            0.888889, 0.666667, 0.444444, 0.222222, 0.0,
        ];
        assert_close(&window, &expected, 1e-6);
    }
    
    #[test]
    fn test_hanning_reference_values() {
        let window = generate_kernel_1d(WindowType::Hanning, 5);
        assert_close(&window, &[0.0, 0.5, 1.0, 0.5, 0.0], 1e-12);
    }
    
    #[test]
    fn test_blackman_reference_values() {
        let window = generate_kernel_1d(WindowType::Blackman, 5);
        assert_close(&window, &[0.0, 0.34, 1.0, 0.34, 0.0], 1e-12);
        // Small negative residue at the edges
        assert!(window[0] <= 0.0 && window[0] > -1e-15);
    }
    
    #[test]
    fn test_sine_reference_values() {
        let window = generate_kernel_1d(WindowType::Sine, 7);
        let expected = [0.0, 0.5, 0.866025, 1.0, 0.866025, 0.5, 0.0];
        assert_close(&window, &expected, 1e-6);
    }
    
    #[test]
    fn test_rectangular_window() {
        let window = generate_kernel_1d(WindowType::Rectangular, 100);
        assert_eq!(window.len(), 100);
        assert!(window.iter().all(|&w| w == 1.0));
    }
    
    #[test]
    fn test_window_symmetry() {
        for window_type in [WindowType::Bartlett, WindowType::Blackman, WindowType::Hanning, WindowType::Sine] {
            for length in [16usize, 17] {
                let window = generate_kernel_1d(window_type, length);
                for i in 0..length {
                    assert!(
                        (window[i] - window[length - 1 - i]).abs() < 1e-12,
                        "{:?} not symmetric at {}",
                        window_type,
                        i
                    );
                }
            }
        }
    }
    
    #[test]
    fn test_degenerate_lengths() {
        assert!(generate_kernel_1d(WindowType::Hanning, 0).is_empty());
        assert_eq!(generate_kernel_1d(WindowType::Hanning, 1), vec![1.0]);
    }
    
    #[test]
    fn test_separable_kernels() {
        let k2 = generate_kernel_2d(WindowType::Hanning, 5, 3);
        assert_eq!(k2.dim(), (5, 3));
        assert!((k2[[2, 1]] - 1.0).abs() < 1e-12);
        assert!(k2[[0, 1]].abs() < 1e-12);
        
        let k3 = generate_kernel_3d(WindowType::Bartlett, [3, 3, 3]);
        assert!((k3[[1, 1, 1]] - 1.0).abs() < 1e-12);
        assert!(k3[[0, 1, 1]].abs() < 1e-12);
    }
}
