//! Face table and faces connectivity flags
//! 
//! A face is "connected" when the topological neighbor across it uses the
//! same four points on its opposite face. Faces of cells separated by a
//! fault share indices but not points and stay unconnected.

use super::explicit::{CellId, ExplicitStructuredGrid, Hexahedron, PointId};

/// Corner indices of each hexahedron face, order -i, +i, -j, +j, -k, +k
pub const HEXAHEDRON_FACES: [[usize; 4]; 6] = [
    [0, 4, 7, 3],
    [1, 2, 6, 5],
    [0, 1, 5, 4],
    [3, 7, 6, 2],
    [0, 3, 2, 1],
    [4, 5, 6, 7],
];

/// Face across the same axis on the other side
#[inline]
pub fn opposite_face(face: usize) -> usize {
    face ^ 1
}

/// Point ids of one face of a cell, sorted
pub(crate) fn sorted_face_points(cell: &Hexahedron, face: usize) -> [PointId; 4] {
    let mut ids = HEXAHEDRON_FACES[face].map(|corner| cell[corner]);
    ids.sort_unstable();
    ids
}

impl ExplicitStructuredGrid {
    /// Compute one connectivity byte per cell and store it as a named cell array
    /// 
    /// Bit `f` is set when cell face `f` has a neighbor (by i-j-k adjacency)
    /// whose opposite face has the same point set. Blanking is ignored.
    /// The array is stored under [`Self::faces_connectivity_flags_array_name`].
    pub fn compute_faces_connectivity_flags_array(&mut self) {
        let flags: Vec<u8> = (0..self.number_of_cells())
            .map(|cell_id| self.connectivity_byte(cell_id))
            .collect();
        
        let name = self.connectivity_flags_name.clone();
        self.cell_arrays.insert(name, flags);
    }
    
    fn connectivity_byte(&self, cell_id: CellId) -> u8 {
        let (Some(cell), Some(neighbors)) = (self.cell_points(cell_id), self.cell_neighbors(cell_id)) else {
            return 0;
        };
        
        let mut byte = 0u8;
        for (face, neighbor) in neighbors.iter().enumerate() {
            let Some(other) = neighbor.and_then(|n| self.cell_points(n)) else {
                continue;
            };
            if sorted_face_points(cell, face) == sorted_face_points(other, opposite_face(face)) {
                byte |= 1 << face;
            }
        }
        byte
    }
    
    /// Connectivity flags from the last computation, if still valid
    pub fn faces_connectivity_flags(&self) -> Option<&[u8]> {
        self.cell_array(&self.connectivity_flags_name)
    }
    
    pub fn faces_connectivity_flags_array_name(&self) -> &str {
        &self.connectivity_flags_name
    }
    
    /// Rename the connectivity flags array; an existing array is moved
    pub fn set_faces_connectivity_flags_array_name(&mut self, name: &str) {
        if let Some(flags) = self.cell_arrays.remove(&self.connectivity_flags_name) {
            self.cell_arrays.insert(name.to_string(), flags);
        }
        self.connectivity_flags_name = name.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::explicit::tests::lattice;
    
    #[test]
    fn test_face_table_consistency() {
        // Opposite faces partition the eight corners
        for axis in 0..3 {
            let mut corners: Vec<usize> = HEXAHEDRON_FACES[2 * axis]
                .iter()
                .chain(HEXAHEDRON_FACES[2 * axis + 1].iter())
                .copied()
                .collect();
            corners.sort_unstable();
            assert_eq!(corners, (0..8).collect::<Vec<_>>());
        }
    }
    
    #[test]
    fn test_regular_lattice_flags() {
        let mut grid = lattice([3, 2, 4]);
        grid.compute_faces_connectivity_flags_array();
        let flags = grid.faces_connectivity_flags().unwrap().to_vec();
        
        for cell_id in 0..grid.number_of_cells() {
            let neighbors = grid.cell_neighbors(cell_id).unwrap();
            for (face, neighbor) in neighbors.iter().enumerate() {
                let connected = flags[cell_id] & (1 << face) != 0;
                // Interior faces connected, boundary faces never
                assert_eq!(connected, neighbor.is_some(), "cell {} face {}", cell_id, face);
            }
            assert_eq!(flags[cell_id] & 0b1100_0000, 0);
        }
    }
    
    #[test]
    fn test_flags_ignore_blanking() {
        let mut grid = lattice([3, 3, 3]);
        grid.compute_faces_connectivity_flags_array();
        let expected = grid.faces_connectivity_flags().unwrap().to_vec();
        
        // Center cell and one interior face neighbor
        grid.blank_cell(13);
        grid.blank_cell(14);
        grid.compute_faces_connectivity_flags_array();
        
        assert_eq!(grid.faces_connectivity_flags().unwrap(), expected.as_slice());
        assert_eq!(expected[13], 0b0011_1111);
    }
    
    #[test]
    fn test_fault_disconnects_faces() {
        let mut grid = lattice([2, 1, 1]);
        
        // Give cell 1 its own copies of the shared face points
        let mut points = grid.points().to_vec();
        let mut cells = grid.cells().to_vec();
        for corner in [0, 3, 4, 7] {
            let p = points[cells[1][corner]];
            points.push([p[0], p[1], p[2] + 0.5]);
            cells[1][corner] = points.len() - 1;
        }
        grid.set_points(points).unwrap();
        grid.set_cells(cells).unwrap();
        
        grid.compute_faces_connectivity_flags_array();
        let flags = grid.faces_connectivity_flags().unwrap();
        assert_eq!(flags, &[0, 0]);
        
        // Still topological neighbors
        assert_eq!(grid.cell_neighbors(0).unwrap()[1], Some(1));
    }
    
    #[test]
    fn test_flags_invalidated_and_renamed() {
        let mut grid = lattice([2, 2, 2]);
        grid.compute_faces_connectivity_flags_array();
        assert!(grid.cell_array("ConnectivityFlags").is_some());
        
        grid.set_faces_connectivity_flags_array_name("FaceFlags");
        assert!(grid.cell_array("ConnectivityFlags").is_none());
        assert!(grid.cell_array("FaceFlags").is_some());
        
        grid.set_cells(grid.cells().to_vec()).unwrap();
        assert!(grid.faces_connectivity_flags().is_none());
    }
}
