//! Python bindings for the explicit structured grid

use pyo3::exceptions::PyIndexError;
use pyo3::prelude::*;

use crate::error::GridError;
use crate::grid::{ExplicitStructuredGrid, Extent};

/// Explicit structured grid exposed to Python
#[pyclass(name = "ExplicitStructuredGrid")]
pub struct PyExplicitStructuredGrid {
    grid: ExplicitStructuredGrid,
}

impl PyExplicitStructuredGrid {
    fn check_cell(&self, cell_id: usize) -> PyResult<()> {
        if cell_id >= self.grid.number_of_cells() {
            return Err(PyIndexError::new_err(GridError::CellIdOutOfRange(cell_id).to_string()));
        }
        Ok(())
    }
}

#[pymethods]
impl PyExplicitStructuredGrid {
    /// Create a grid
    /// 
    /// Args:
    ///     extent: [imin, imax, jmin, jmax, kmin, kmax] point extent
    ///     cells: One list of 8 point ids per cell, i fastest
    ///     points: Point coordinates
    #[new]
    fn new(extent: [i32; 6], cells: Vec<[usize; 8]>, points: Vec<[f64; 3]>) -> PyResult<Self> {
        let grid = ExplicitStructuredGrid::new(Extent::new(extent)?, cells, points)?;
        Ok(Self { grid })
    }
    
    /// Build a regular lattice over image-like points (i fastest)
    #[staticmethod]
    fn from_structured_points(extent: [i32; 6], points: Vec<[f64; 3]>) -> PyResult<Self> {
        let grid = ExplicitStructuredGrid::from_structured_points(Extent::new(extent)?, points)?;
        Ok(Self { grid })
    }
    
    fn extent(&self) -> [i32; 6] {
        self.grid.extent().as_array()
    }
    
    fn number_of_cells(&self) -> usize {
        self.grid.number_of_cells()
    }
    
    fn number_of_points(&self) -> usize {
        self.grid.number_of_points()
    }
    
    #[pyo3(signature = (i, j, k, adjust_for_extent=true))]
    fn compute_cell_id(&self, i: i32, j: i32, k: i32, adjust_for_extent: bool) -> Option<usize> {
        self.grid.compute_cell_id([i, j, k], adjust_for_extent)
    }
    
    #[pyo3(signature = (cell_id, adjust_for_extent=true))]
    fn compute_cell_structured_coords(&self, cell_id: usize, adjust_for_extent: bool) -> Option<[i32; 3]> {
        self.grid.compute_cell_structured_coords(cell_id, adjust_for_extent)
    }
    
    fn cell_points(&self, cell_id: usize) -> Option<[usize; 8]> {
        self.grid.cell_points(cell_id).copied()
    }
    
    /// Neighbor ids across faces -i, +i, -j, +j, -k, +k (None at the boundary)
    fn cell_neighbors(&self, cell_id: usize) -> Option<[Option<usize>; 6]> {
        self.grid.cell_neighbors(cell_id)
    }
    
    fn blank_cell(&mut self, cell_id: usize) -> PyResult<()> {
        self.check_cell(cell_id)?;
        self.grid.blank_cell(cell_id);
        Ok(())
    }
    
    fn unblank_cell(&mut self, cell_id: usize) -> PyResult<()> {
        self.check_cell(cell_id)?;
        self.grid.unblank_cell(cell_id);
        Ok(())
    }
    
    fn is_cell_visible(&self, cell_id: usize) -> bool {
        self.grid.is_cell_visible(cell_id)
    }
    
    fn is_cell_ghost(&self, cell_id: usize) -> bool {
        self.grid.is_cell_ghost(cell_id)
    }
    
    fn generate_ghost_array(&mut self, zero_extent: [i32; 6]) -> PyResult<()> {
        self.grid.generate_ghost_array(&Extent::new(zero_extent)?);
        Ok(())
    }
    
    fn compute_faces_connectivity_flags_array(&mut self) {
        self.grid.compute_faces_connectivity_flags_array();
    }
    
    fn faces_connectivity_flags(&self) -> Option<Vec<u8>> {
        self.grid.faces_connectivity_flags().map(<[u8]>::to_vec)
    }
    
    /// Repair axis-swapped or mirrored cells
    /// 
    /// Returns:
    ///     None on a clean repair, otherwise a warning message
    fn check_and_reorder_faces(&mut self) -> Option<String> {
        self.grid.check_and_reorder_faces().err().map(|w| w.to_string())
    }
    
    /// Crop to a sub-extent
    /// 
    /// Returns:
    ///     (cropped grid, original cell ids or None)
    #[pyo3(signature = (update_extent, generate_original_cell_ids=true))]
    fn crop(&self, update_extent: [i32; 6], generate_original_cell_ids: bool) -> PyResult<(Self, Option<Vec<usize>>)> {
        let cropped = self.grid.crop(&Extent::new(update_extent)?, generate_original_cell_ids)?;
        Ok((Self { grid: cropped.grid }, cropped.original_cell_ids))
    }
}
