//! Point-index extents of structured grids
//! 
//! An extent is `[imin, imax, jmin, jmax, kmin, kmax]` in point indices.
//! Cells span `[min, max - 1]` along each axis.

use crate::error::GridError;

/// Six-integer point-index bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent([i32; 6]);

impl Extent {
    /// Create an extent, rejecting any axis with max < min
    pub fn new(extent: [i32; 6]) -> Result<Self, GridError> {
        if extent[1] < extent[0] || extent[3] < extent[2] || extent[5] < extent[4] {
            return Err(GridError::InvalidExtent(extent));
        }
        Ok(Self(extent))
    }
    
    /// Zero-based extent with the given number of points per axis (each >= 1)
    pub fn from_point_dimensions(dims: [usize; 3]) -> Result<Self, GridError> {
        let max = |d: usize| d as i32 - 1;
        Self::new([0, max(dims[0]), 0, max(dims[1]), 0, max(dims[2])])
    }
    
    pub fn as_array(&self) -> [i32; 6] {
        self.0
    }
    
    /// Lower corner (imin, jmin, kmin)
    pub fn min(&self) -> [i32; 3] {
        [self.0[0], self.0[2], self.0[4]]
    }
    
    /// Number of points along each axis
    pub fn point_dimensions(&self) -> [usize; 3] {
        [
            (self.0[1] - self.0[0] + 1) as usize,
            (self.0[3] - self.0[2] + 1) as usize,
            (self.0[5] - self.0[4] + 1) as usize,
        ]
    }
    
    /// Number of cells along each axis
    pub fn cell_dimensions(&self) -> [usize; 3] {
        [
            (self.0[1] - self.0[0]) as usize,
            (self.0[3] - self.0[2]) as usize,
            (self.0[5] - self.0[4]) as usize,
        ]
    }
    
    pub fn number_of_cells(&self) -> usize {
        self.cell_dimensions().iter().product()
    }
    
    pub fn number_of_points(&self) -> usize {
        self.point_dimensions().iter().product()
    }
    
    /// Whether the cell with extent-relative coordinates (i, j, k) lies inside
    pub fn contains_cell(&self, ijk: [i32; 3]) -> bool {
        (0..3).all(|axis| ijk[axis] >= self.0[2 * axis] && ijk[axis] < self.0[2 * axis + 1])
    }
    
    /// Overlap of two extents, or None if they are disjoint on any axis
    pub fn intersect(&self, other: &Extent) -> Option<Extent> {
        let mut result = [0; 6];
        for axis in 0..3 {
            let lo = self.0[2 * axis].max(other.0[2 * axis]);
            let hi = self.0[2 * axis + 1].min(other.0[2 * axis + 1]);
            if hi < lo {
                return None;
            }
            result[2 * axis] = lo;
            result[2 * axis + 1] = hi;
        }
        Some(Extent(result))
    }
}
