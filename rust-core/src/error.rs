//! Error types for the spectral and grid engines

use thiserror::Error;

/// Errors raised by the spectral estimation routines
#[derive(Error, Debug)]
pub enum SpectralError {
    #[error("Input `{0}` must not be empty")]
    EmptyInput(&'static str),
    
    #[error("Window of {window} samples is longer than the signal ({signal} samples)")]
    WindowLongerThanSignal { window: usize, signal: usize },
    
    #[error("Overlap of {noverlap} samples leaves no stride for a window of {window} samples")]
    InvalidOverlap { noverlap: usize, window: usize },
    
    #[error("Sample rate must be strictly positive (found: {0})")]
    InvalidSampleRate(f64),
    
    #[error("FFT processing failed: {0}")]
    Fft(#[from] realfft::FftError),
}

/// Errors raised while building or mutating an explicit structured grid
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid extent {0:?}: every max must be >= its min")]
    InvalidExtent([i32; 6]),
    
    #[error("Extent describes {expected} cells but {found} were supplied")]
    CellCountMismatch { expected: usize, found: usize },
    
    #[error("Extent describes {expected} points but {found} were supplied")]
    PointCountMismatch { expected: usize, found: usize },
    
    #[error("Cell array `{name}` has {found} values but the grid has {expected} cells")]
    CellArrayLength {
        name: String,
        expected: usize,
        found: usize,
    },
    
    #[error("Cell {cell} references point {point} but only {num_points} points exist")]
    PointIdOutOfRange {
        cell: usize,
        point: usize,
        num_points: usize,
    },
    
    #[error("Cell id {0} is out of range")]
    CellIdOutOfRange(usize),
    
    #[error("Extent {requested:?} does not overlap grid extent {current:?}")]
    DisjointExtent {
        current: [i32; 6],
        requested: [i32; 6],
    },
}

/// Non-fatal outcome of face reordering.
/// 
/// The grid has been repaired as far as the data allowed; the variant says
/// what had to be guessed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReorderWarning {
    /// Some logical axes had no detectable connected face pair and were
    /// assigned the lowest unused one.
    #[error("Could not detect face pair for axes {axes:?}, assumed {assumed:?}")]
    UnresolvedAxes {
        axes: Vec<usize>,
        assumed: [usize; 3],
    },
    
    /// Cells whose points do not form a valid hexahedron were left as-is.
    #[error("{0} cells have degenerate point lists and were reordered blindly")]
    DegenerateCells(usize),
}
