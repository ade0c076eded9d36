//! Mesh Spectra - spectral analysis and explicit structured grid topology
//! 
//! Two independent engines:
//! - [`spectrum`]: FFTs, window kernels, Welch cross-spectral density,
//!   spectrograms and octave band edges
//! - [`grid`]: i-j-k addressable hexahedral meshes with blanking, ghost
//!   levels, face connectivity flags, face reordering and cropping
//! 
//! Python bindings are available behind the `python` feature.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod grid;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{GridError, ReorderWarning, SpectralError};
pub use grid::{ExplicitStructuredGrid, Extent};
pub use spectrum::{FftEngine, SpectralConfig, WindowType};
