//! Explicit structured grid: i-j-k addressable hexahedra with arbitrary points
//! 
//! Cells are stored in lexicographic order (i fastest, then j, then k), each as
//! eight point ids in the canonical corner order:
//! 
//! ```text
//!   corner:  0       1       2       3       4       5       6       7
//!   (i,j,k): (0,0,0) (1,0,0) (1,1,0) (0,1,0) (0,0,1) (1,0,1) (1,1,1) (0,1,1)
//! ```
//! 
//! Neighbors are derived from i-j-k arithmetic only, never from point geometry.

use std::collections::BTreeMap;

use super::extent::Extent;
use crate::error::GridError;

pub type CellId = usize;
pub type PointId = usize;

/// Eight point ids of a hexahedral cell, in canonical corner order
pub type Hexahedron = [PointId; 8];

/// Ghost-type bit: cell is owned by another partition
pub const DUPLICATE_CELL: u8 = 0x01;

/// Ghost-type bit: cell is blanked
pub const HIDDEN_CELL: u8 = 0x20;

/// Default name of the faces connectivity flags cell array
pub const DEFAULT_CONNECTIVITY_FLAGS_NAME: &str = "ConnectivityFlags";

/// Hexahedral mesh addressable by (i, j, k) with explicit point coordinates
#[derive(Debug, Clone)]
pub struct ExplicitStructuredGrid {
    /// Point-index extent
    extent: Extent,
    
    /// One hexahedron per cell, lexicographic order
    cells: Vec<Hexahedron>,
    
    /// Point coordinates, indexed by the ids in `cells`
    points: Vec<[f64; 3]>,
    
    /// Point → incident cells, built on demand
    links: Option<Vec<Vec<CellId>>>,
    
    /// Per-cell ghost/blanking bit flags, created on first use
    ghost_types: Option<Vec<u8>>,
    
    /// Per-cell ghost level from the last `generate_ghost_array`
    ghost_levels: Option<Vec<u8>>,
    
    /// Named per-cell byte arrays
    pub(crate) cell_arrays: BTreeMap<String, Vec<u8>>,
    
    /// Name under which connectivity flags are stored
    pub(crate) connectivity_flags_name: String,
}

impl ExplicitStructuredGrid {
    /// Create a grid from an extent, its cells and their points
    /// 
    /// # Arguments
    /// * `extent` - Point-index extent; fixes the number of cells
    /// * `cells` - Exactly `product(dims - 1)` hexahedra, lexicographic order
    /// * `points` - Coordinates; every id used by `cells` must be in range
    pub fn new(
        extent: Extent,
        cells: Vec<Hexahedron>,
        points: Vec<[f64; 3]>,
    ) -> Result<Self, GridError> {
        validate_cells(&extent, &cells, points.len())?;
        
        Ok(Self {
            extent,
            cells,
            points,
            links: None,
            ghost_types: None,
            ghost_levels: None,
            cell_arrays: BTreeMap::new(),
            connectivity_flags_name: DEFAULT_CONNECTIVITY_FLAGS_NAME.to_string(),
        })
    }
    
    /// Build the regular lattice connectivity over image-like points
    /// 
    /// # Arguments
    /// * `extent` - Point-index extent
    /// * `points` - One point per extent index, i fastest then j then k
    pub fn from_structured_points(
        extent: Extent,
        points: Vec<[f64; 3]>,
    ) -> Result<Self, GridError> {
        if points.len() != extent.number_of_points() {
            return Err(GridError::PointCountMismatch {
                expected: extent.number_of_points(),
                found: points.len(),
            });
        }
        
        Self::new(extent, lattice_cells(&extent), points)
    }
    
    pub fn extent(&self) -> Extent {
        self.extent
    }
    
    pub fn cells(&self) -> &[Hexahedron] {
        &self.cells
    }
    
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }
    
    pub fn number_of_cells(&self) -> usize {
        self.cells.len()
    }
    
    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }
    
    /// Replace the extent together with the cells it describes
    /// 
    /// The cells are validated against the new extent and the current points
    /// before anything changes; on error the grid is left untouched. All
    /// derived data (links, ghost arrays, cell arrays) is dropped.
    pub fn set_extent(&mut self, extent: Extent, cells: Vec<Hexahedron>) -> Result<(), GridError> {
        validate_cells(&extent, &cells, self.points.len())?;
        self.extent = extent;
        self.cells = cells;
        self.ghost_types = None;
        self.ghost_levels = None;
        self.cell_arrays.clear();
        self.invalidate_links();
        Ok(())
    }
    
    /// Replace the cell connectivity
    /// 
    /// Invalidates links and connectivity flags.
    pub fn set_cells(&mut self, cells: Vec<Hexahedron>) -> Result<(), GridError> {
        validate_cells(&self.extent, &cells, self.points.len())?;
        self.cells = cells;
        self.invalidate_topology();
        Ok(())
    }
    
    /// Replace the point coordinates
    /// 
    /// Invalidates connectivity flags.
    pub fn set_points(&mut self, points: Vec<[f64; 3]>) -> Result<(), GridError> {
        validate_cells(&self.extent, &self.cells, points.len())?;
        if points.len() != self.points.len() {
            self.invalidate_links();
        }
        self.points = points;
        self.cell_arrays.remove(&self.connectivity_flags_name);
        Ok(())
    }
    
    /// Drop links and connectivity flags after a change of cell point order
    pub(crate) fn invalidate_topology(&mut self) {
        self.invalidate_links();
        self.cell_arrays.remove(&self.connectivity_flags_name);
    }
    
    fn invalidate_links(&mut self) {
        self.links = None;
    }
    
    pub(crate) fn cells_mut(&mut self) -> &mut [Hexahedron] {
        &mut self.cells
    }
    
    /// Linear cell id from structured coordinates
    /// 
    /// # Arguments
    /// * `ijk` - Cell coordinates
    /// * `adjust_for_extent` - When true, `ijk` is in extent coordinates
    ///   (offset by the extent minimum); when false it is zero-based
    /// 
    /// # Returns
    /// `(k - k0)·di·dj + (j - j0)·di + (i - i0)`, or None outside the grid
    pub fn compute_cell_id(&self, ijk: [i32; 3], adjust_for_extent: bool) -> Option<CellId> {
        let dims = self.extent.cell_dimensions();
        let origin = if adjust_for_extent { self.extent.min() } else { [0; 3] };
        
        let mut local = [0usize; 3];
        for axis in 0..3 {
            let offset = ijk[axis] - origin[axis];
            if offset < 0 || offset as usize >= dims[axis] {
                return None;
            }
            local[axis] = offset as usize;
        }
        
        Some((local[2] * dims[1] + local[1]) * dims[0] + local[0])
    }
    
    /// Structured coordinates of a cell; inverse of [`Self::compute_cell_id`]
    pub fn compute_cell_structured_coords(
        &self,
        cell_id: CellId,
        adjust_for_extent: bool,
    ) -> Option<[i32; 3]> {
        if cell_id >= self.cells.len() {
            return None;
        }
        
        let dims = self.extent.cell_dimensions();
        let i = cell_id % dims[0];
        let j = (cell_id / dims[0]) % dims[1];
        let k = cell_id / (dims[0] * dims[1]);
        
        let origin = if adjust_for_extent { self.extent.min() } else { [0; 3] };
        Some([
            i as i32 + origin[0],
            j as i32 + origin[1],
            k as i32 + origin[2],
        ])
    }
    
    /// Eight point ids of a cell, canonical corner order
    pub fn cell_points(&self, cell_id: CellId) -> Option<&Hexahedron> {
        self.cells.get(cell_id)
    }
    
    /// Neighbor across each face, in face order -i, +i, -j, +j, -k, +k
    /// 
    /// Purely index based: a neighbor is reported whenever the adjacent
    /// (i, j, k) is inside the extent, whether or not the points coincide.
    pub fn cell_neighbors(&self, cell_id: CellId) -> Option<[Option<CellId>; 6]> {
        let ijk = self.compute_cell_structured_coords(cell_id, false)?;
        
        let mut neighbors = [None; 6];
        for (face, neighbor) in neighbors.iter_mut().enumerate() {
            let axis = face / 2;
            let mut nijk = ijk;
            nijk[axis] += if face % 2 == 0 { -1 } else { 1 };
            *neighbor = self.compute_cell_id(nijk, false);
        }
        
        Some(neighbors)
    }
    
    /// Axis-aligned bounds `[xmin, xmax, ymin, ymax, zmin, zmax]` of a cell's points
    pub fn cell_bounds(&self, cell_id: CellId) -> Option<[f64; 6]> {
        let cell = self.cells.get(cell_id)?;
        
        let mut bounds = [
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        ];
        for &pt in cell {
            let p = self.points[pt];
            for axis in 0..3 {
                bounds[2 * axis] = bounds[2 * axis].min(p[axis]);
                bounds[2 * axis + 1] = bounds[2 * axis + 1].max(p[axis]);
            }
        }
        
        Some(bounds)
    }
    
    /// Build the point → cells reverse index if not already built
    pub fn build_links(&mut self) {
        if self.links.is_some() {
            return;
        }
        
        let mut links = vec![Vec::new(); self.points.len()];
        for (cell_id, cell) in self.cells.iter().enumerate() {
            for &pt in cell {
                // Degenerate cells may repeat a point
                if links[pt].last() != Some(&cell_id) {
                    links[pt].push(cell_id);
                }
            }
        }
        
        self.links = Some(links);
    }
    
    pub fn links_built(&self) -> bool {
        self.links.is_some()
    }
    
    /// Cells using `point_id`; None until [`Self::build_links`] has run
    pub fn point_cells(&self, point_id: PointId) -> Option<&[CellId]> {
        self.links.as_ref()?.get(point_id).map(Vec::as_slice)
    }
    
    /// Cells other than `cell_id` that use every point in `point_ids`
    pub fn cell_neighbors_sharing(&mut self, cell_id: CellId, point_ids: &[PointId]) -> Vec<CellId> {
        self.build_links();
        
        let Some((&first, rest)) = point_ids.split_first() else {
            return Vec::new();
        };
        let Some(candidates) = self.point_cells(first) else {
            return Vec::new();
        };
        
        candidates
            .iter()
            .copied()
            .filter(|&candidate| candidate != cell_id)
            .filter(|&candidate| {
                rest.iter().all(|&pt| {
                    self.point_cells(pt)
                        .is_some_and(|cells| cells.contains(&candidate))
                })
            })
            .collect()
    }
    
    fn ghost_types_mut(&mut self) -> &mut Vec<u8> {
        let num_cells = self.cells.len();
        self.ghost_types.get_or_insert_with(|| vec![0; num_cells])
    }
    
    /// Mark a cell invisible
    /// 
    /// Out-of-range ids are a caller error: asserted in debug builds,
    /// ignored in release builds.
    pub fn blank_cell(&mut self, cell_id: CellId) {
        debug_assert!(cell_id < self.cells.len(), "cell id {} out of range", cell_id);
        if let Some(flags) = self.ghost_types_mut().get_mut(cell_id) {
            *flags |= HIDDEN_CELL;
        }
    }
    
    /// Make a blanked cell visible again
    pub fn unblank_cell(&mut self, cell_id: CellId) {
        debug_assert!(cell_id < self.cells.len(), "cell id {} out of range", cell_id);
        if let Some(flags) = self.ghost_types_mut().get_mut(cell_id) {
            *flags &= !HIDDEN_CELL;
        }
    }
    
    /// Visible unless explicitly blanked
    pub fn is_cell_visible(&self, cell_id: CellId) -> bool {
        self.ghost_flags(cell_id) & HIDDEN_CELL == 0
    }
    
    pub fn is_cell_ghost(&self, cell_id: CellId) -> bool {
        self.ghost_flags(cell_id) & DUPLICATE_CELL != 0
    }
    
    pub fn has_any_blank_cells(&self) -> bool {
        self.ghost_types
            .as_ref()
            .is_some_and(|types| types.iter().any(|t| t & HIDDEN_CELL != 0))
    }
    
    fn ghost_flags(&self, cell_id: CellId) -> u8 {
        self.ghost_types
            .as_ref()
            .and_then(|types| types.get(cell_id).copied())
            .unwrap_or(0)
    }
    
    /// Per-cell ghost/blanking flags, if any were ever set
    pub fn ghost_types(&self) -> Option<&[u8]> {
        self.ghost_types.as_deref()
    }
    
    pub(crate) fn set_ghost_types(&mut self, types: Option<Vec<u8>>) {
        self.ghost_types = types;
    }
    
    /// Per-cell ghost levels from the last [`Self::generate_ghost_array`]
    pub fn ghost_levels(&self) -> Option<&[u8]> {
        self.ghost_levels.as_deref()
    }
    
    /// Mark cells outside `zero_extent` as ghosts
    /// 
    /// Each cell gets level `max(0, max over axes of its distance in cells
    /// from the cells of zero_extent)`. Level 0 cells lose the ghost bit,
    /// all others gain it; blanking is preserved.
    pub fn generate_ghost_array(&mut self, zero_extent: &Extent) {
        let ext = zero_extent.as_array();
        let levels: Vec<u8> = (0..self.cells.len())
            .map(|cell_id| {
                let ijk = self
                    .compute_cell_structured_coords(cell_id, true)
                    .unwrap_or_default();
                if zero_extent.contains_cell(ijk) {
                    return 0;
                }
                let level = (0..3)
                    .map(|axis| {
                        let first = ext[2 * axis];
                        let last = ext[2 * axis + 1] - 1;
                        (first - ijk[axis]).max(ijk[axis] - last).max(0)
                    })
                    .max()
                    .unwrap_or(0);
                level.min(u8::MAX as i32) as u8
            })
            .collect();
        
        let types = self.ghost_types_mut();
        for (flags, &level) in types.iter_mut().zip(levels.iter()) {
            if level > 0 {
                *flags |= DUPLICATE_CELL;
            } else {
                *flags &= !DUPLICATE_CELL;
            }
        }
        
        self.ghost_levels = Some(levels);
    }
    
    /// Named per-cell byte array
    pub fn cell_array(&self, name: &str) -> Option<&[u8]> {
        self.cell_arrays.get(name).map(Vec::as_slice)
    }
    
    /// Store a named per-cell byte array (one value per cell)
    pub fn set_cell_array(&mut self, name: &str, values: Vec<u8>) -> Result<(), GridError> {
        if values.len() != self.cells.len() {
            return Err(GridError::CellArrayLength {
                name: name.to_string(),
                expected: self.cells.len(),
                found: values.len(),
            });
        }
        self.cell_arrays.insert(name.to_string(), values);
        Ok(())
    }
    
    pub fn cell_array_names(&self) -> impl Iterator<Item = &str> {
        self.cell_arrays.keys().map(String::as_str)
    }
}

fn validate_cells(extent: &Extent, cells: &[Hexahedron], num_points: usize) -> Result<(), GridError> {
    let expected = extent.number_of_cells();
    if cells.len() != expected {
        return Err(GridError::CellCountMismatch {
            expected,
            found: cells.len(),
        });
    }
    
    for (cell, hex) in cells.iter().enumerate() {
        if let Some(&point) = hex.iter().find(|&&pt| pt >= num_points) {
            return Err(GridError::PointIdOutOfRange {
                cell,
                point,
                num_points,
            });
        }
    }
    
    Ok(())
}

/// Canonical corner offsets (di, dj, dk)
pub(crate) const CORNER_OFFSETS: [[usize; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

/// Regular lattice connectivity: point id = i + j·nx + k·nx·ny
fn lattice_cells(extent: &Extent) -> Vec<Hexahedron> {
    let [ci, cj, ck] = extent.cell_dimensions();
    let [nx, ny, _] = extent.point_dimensions();
    
    let mut cells = Vec::with_capacity(extent.number_of_cells());
    for k in 0..ck {
        for j in 0..cj {
            for i in 0..ci {
                let mut hex = [0; 8];
                for (corner, offset) in CORNER_OFFSETS.iter().enumerate() {
                    hex[corner] = (i + offset[0]) + (j + offset[1]) * nx + (k + offset[2]) * nx * ny;
                }
                cells.push(hex);
            }
        }
    }
    cells
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    
    /// Unit-spaced lattice with the given number of cells per axis
    pub(crate) fn lattice(cells: [usize; 3]) -> ExplicitStructuredGrid {
        let extent = Extent::from_point_dimensions([cells[0] + 1, cells[1] + 1, cells[2] + 1]).unwrap();
        lattice_with_extent(extent)
    }
    
    pub(crate) fn lattice_with_extent(extent: Extent) -> ExplicitStructuredGrid {
        let [nx, ny, nz] = extent.point_dimensions();
        let mut points = Vec::with_capacity(nx * ny * nz);
        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    points.push([i as f64, j as f64, k as f64]);
                }
            }
        }
        ExplicitStructuredGrid::from_structured_points(extent, points).unwrap()
    }
    
    #[test]
    fn test_lattice_construction() {
        let grid = lattice([3, 2, 2]);
        assert_eq!(grid.number_of_cells(), 12);
        assert_eq!(grid.number_of_points(), 36);
        assert_eq!(grid.cell_points(0), Some(&[0, 1, 5, 4, 12, 13, 17, 16]));
        assert_eq!(grid.cell_bounds(0), Some([0.0, 1.0, 0.0, 1.0, 0.0, 1.0]));
        assert!(grid.cell_points(12).is_none());
    }
    
    #[test]
    fn test_construction_errors() {
        let extent = Extent::new([0, 1, 0, 1, 0, 1]).unwrap();
        
        let err = ExplicitStructuredGrid::new(extent, vec![], vec![[0.0; 3]; 8]).unwrap_err();
        assert_eq!(err, GridError::CellCountMismatch { expected: 1, found: 0 });
        
        let err = ExplicitStructuredGrid::new(extent, vec![[0, 1, 2, 3, 4, 5, 6, 8]], vec![[0.0; 3]; 8])
            .unwrap_err();
        assert_eq!(err, GridError::PointIdOutOfRange { cell: 0, point: 8, num_points: 8 });
        
        let err = ExplicitStructuredGrid::from_structured_points(extent, vec![[0.0; 3]; 7]).unwrap_err();
        assert_eq!(err, GridError::PointCountMismatch { expected: 8, found: 7 });
    }
    
    #[test]
    fn test_cell_id_round_trip() {
        let extent = Extent::new([2, 6, -1, 2, 3, 5]).unwrap();
        let grid = lattice_with_extent(extent);
        let [di, dj, dk] = extent.cell_dimensions();
        
        for k in 0..dk as i32 {
            for j in 0..dj as i32 {
                for i in 0..di as i32 {
                    let local = grid.compute_cell_id([i, j, k], false).unwrap();
                    assert_eq!(grid.compute_cell_structured_coords(local, false), Some([i, j, k]));
                    
                    let global_ijk = [i + 2, j - 1, k + 3];
                    let global = grid.compute_cell_id(global_ijk, true).unwrap();
                    assert_eq!(global, local);
                    assert_eq!(grid.compute_cell_structured_coords(global, true), Some(global_ijk));
                }
            }
        }
        
        assert_eq!(grid.compute_cell_id([0, 0, 0], true), None);
        assert_eq!(grid.compute_cell_id([4, 0, 0], false), None);
        assert_eq!(grid.compute_cell_structured_coords(grid.number_of_cells(), false), None);
    }
    
    #[test]
    fn test_neighbor_symmetry() {
        let grid = lattice([3, 4, 2]);
        
        for cell_id in 0..grid.number_of_cells() {
            let neighbors = grid.cell_neighbors(cell_id).unwrap();
            for (face, neighbor) in neighbors.iter().enumerate() {
                if let Some(other) = neighbor {
                    let back = grid.cell_neighbors(*other).unwrap();
                    assert_eq!(back[face ^ 1], Some(cell_id));
                }
            }
        }
    }
    
    #[test]
    fn test_boundary_neighbors() {
        let grid = lattice([2, 2, 2]);
        assert_eq!(
            grid.cell_neighbors(0).unwrap(),
            [None, Some(1), None, Some(2), None, Some(4)]
        );
        assert_eq!(
            grid.cell_neighbors(7).unwrap(),
            [Some(6), None, Some(5), None, Some(3), None]
        );
    }
    
    #[test]
    fn test_blanking() {
        let mut grid = lattice([2, 2, 1]);
        assert!(grid.ghost_types().is_none());
        assert!(!grid.has_any_blank_cells());
        
        grid.blank_cell(2);
        assert!(!grid.is_cell_visible(2));
        assert!(grid.is_cell_visible(1));
        assert!(grid.has_any_blank_cells());
        assert_eq!(grid.ghost_types().unwrap().len(), 4);
        assert!(!grid.is_cell_ghost(2));
        
        grid.unblank_cell(2);
        assert!(grid.is_cell_visible(2));
        assert!(!grid.has_any_blank_cells());
    }
    
    #[test]
    fn test_ghost_levels() {
        let mut grid = lattice([5, 1, 1]);
        grid.blank_cell(0);
        
        // Cells 1..=2 are owned
        let zero = Extent::new([1, 3, 0, 1, 0, 1]).unwrap();
        grid.generate_ghost_array(&zero);
        
        assert_eq!(grid.ghost_levels().unwrap(), &[1, 0, 0, 1, 2]);
        assert!(grid.is_cell_ghost(0));
        assert!(!grid.is_cell_ghost(1));
        assert!(grid.is_cell_ghost(4));
        // Blanking survives ghost generation
        assert!(!grid.is_cell_visible(0));
    }
    
    #[test]
    fn test_links() {
        let mut grid = lattice([2, 2, 2]);
        assert!(grid.point_cells(0).is_none());
        
        grid.build_links();
        assert!(grid.links_built());
        // Center point of the 3x3x3 lattice touches all cells
        assert_eq!(grid.point_cells(13).unwrap().len(), 8);
        assert_eq!(grid.point_cells(0).unwrap(), &[0]);
        
        // Face of cell 0 toward +i is shared with cell 1 only
        let cell = *grid.cell_points(0).unwrap();
        let face = [cell[1], cell[2], cell[6], cell[5]];
        assert_eq!(grid.cell_neighbors_sharing(0, &face), vec![1]);
        
        grid.set_cells(grid.cells().to_vec()).unwrap();
        assert!(!grid.links_built());
    }
    
    #[test]
    fn test_set_extent_replaces_cells() {
        let mut grid = lattice([2, 2, 2]);
        grid.blank_cell(0);
        grid.set_cell_array("material", vec![1; 8]).unwrap();
        
        // Bottom two cells of the lattice along k
        let cells = vec![grid.cells()[0], grid.cells()[4]];
        grid.set_extent(Extent::new([0, 1, 0, 1, 0, 2]).unwrap(), cells.clone()).unwrap();
        assert_eq!(grid.number_of_cells(), 2);
        assert_eq!(grid.cells(), cells.as_slice());
        assert!(grid.ghost_types().is_none());
        assert!(grid.cell_array("material").is_none());
    }
    
    #[test]
    fn test_set_extent_rejects_invalid_cells() {
        let empty = Extent::new([0, 0, 0, 0, 0, 0]).unwrap();
        let mut grid = ExplicitStructuredGrid::new(empty, vec![], vec![]).unwrap();
        let one_cell = Extent::new([0, 1, 0, 1, 0, 1]).unwrap();
        
        // No points to reference
        let err = grid.set_extent(one_cell, vec![[0; 8]]).unwrap_err();
        assert_eq!(err, GridError::PointIdOutOfRange { cell: 0, point: 0, num_points: 0 });
        assert_eq!(grid.number_of_cells(), 0);
        assert_eq!(grid.cell_bounds(0), None);
        
        // Cell count must follow the new extent
        let mut grid = lattice([2, 1, 1]);
        let before = grid.cells().to_vec();
        grid.compute_faces_connectivity_flags_array();
        let err = grid
            .set_extent(Extent::new([0, 3, 0, 1, 0, 1]).unwrap(), before.clone())
            .unwrap_err();
        assert_eq!(err, GridError::CellCountMismatch { expected: 3, found: 2 });
        assert_eq!(grid.extent().as_array(), [0, 2, 0, 1, 0, 1]);
        assert_eq!(grid.cells(), before.as_slice());
        assert_eq!(grid.faces_connectivity_flags(), Some(&[2u8, 1][..]));
    }
    
    #[test]
    fn test_cell_array_length_checked() {
        let mut grid = lattice([2, 1, 1]);
        assert!(matches!(
            grid.set_cell_array("material", vec![0; 3]),
            Err(GridError::CellArrayLength { expected: 2, found: 3, .. })
        ));
        grid.set_cell_array("material", vec![4, 5]).unwrap();
        assert_eq!(grid.cell_array("material"), Some(&[4u8, 5][..]));
        assert_eq!(grid.cell_array_names().collect::<Vec<_>>(), vec!["material"]);
    }
}
