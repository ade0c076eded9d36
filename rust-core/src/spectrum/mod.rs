//! Spectral analysis with FFT

pub mod fft;
pub mod kernels;
pub mod windowing;
pub mod analysis;
pub mod octave;

pub use fft::{fft, fft_freq, ifft, irfft, rfft, rfft_freq, FftEngine};
pub use kernels::{generate_kernel_1d, generate_kernel_2d, generate_kernel_3d, WindowType};
pub use windowing::{apply_window, Sample};
pub use analysis::{csd, spectrogram, Scaling, SpectralConfig, SpectralMode, Spectrogram};
pub use octave::{octave_frequency_range, Octave, OctaveBase, OctaveSubdivision};
