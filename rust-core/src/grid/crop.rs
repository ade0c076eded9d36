//! Cropping a grid to a sub-extent

use super::explicit::{CellId, ExplicitStructuredGrid};
use super::extent::Extent;
use crate::error::GridError;

/// Result of [`ExplicitStructuredGrid::crop`]
#[derive(Debug, Clone)]
pub struct CroppedGrid {
    pub grid: ExplicitStructuredGrid,
    
    /// Source cell id of every cropped cell, when requested
    pub original_cell_ids: Option<Vec<CellId>>,
}

impl ExplicitStructuredGrid {
    /// Extract the cells inside `update_extent`
    /// 
    /// # Arguments
    /// * `update_extent` - Requested extent; intersected with the grid extent
    /// * `generate_original_cell_ids` - Also return the source id of each cell
    /// 
    /// # Returns
    /// A new grid over the intersection, cells in lexicographic order. Points
    /// are copied unchanged, ghost flags and named cell arrays are carried over
    /// per cell. Connectivity flags are not: faces on the crop boundary lose
    /// their neighbor, so they must be recomputed.
    pub fn crop(
        &self,
        update_extent: &Extent,
        generate_original_cell_ids: bool,
    ) -> Result<CroppedGrid, GridError> {
        let extent = self
            .extent()
            .intersect(update_extent)
            .ok_or(GridError::DisjointExtent {
                current: self.extent().as_array(),
                requested: update_extent.as_array(),
            })?;
        
        let ext = extent.as_array();
        let mut source_ids = Vec::with_capacity(extent.number_of_cells());
        for k in ext[4]..ext[5] {
            for j in ext[2]..ext[3] {
                for i in ext[0]..ext[1] {
                    if let Some(id) = self.compute_cell_id([i, j, k], true) {
                        source_ids.push(id);
                    }
                }
            }
        }
        
        let cells = source_ids.iter().map(|&id| self.cells()[id]).collect();
        let mut grid = ExplicitStructuredGrid::new(extent, cells, self.points().to_vec())?;
        
        let pick = |values: &[u8]| -> Vec<u8> { source_ids.iter().map(|&id| values[id]).collect() };
        
        grid.set_ghost_types(self.ghost_types().map(pick));
        for (name, values) in &self.cell_arrays {
            if *name != self.connectivity_flags_name {
                grid.cell_arrays.insert(name.clone(), pick(values));
            }
        }
        grid.connectivity_flags_name = self.connectivity_flags_name.clone();
        
        Ok(CroppedGrid {
            grid,
            original_cell_ids: generate_original_cell_ids.then_some(source_ids),
        })
    }
}
