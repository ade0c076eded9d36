//! Face reordering: repair axis-swapped or mirrored corner orders
//! 
//! Producers sometimes hand over hexahedra whose corners follow another
//! axis convention, so the face table no longer matches the i-j-k topology.
//! The repair assumes every cell carries the same error and runs two passes:
//! 
//! 1. swap: find which physical face pair is shared with the +i, +j and +k
//!    neighbors and permute corners so pair `a` lines up with axis `a`
//! 2. mirror: with axes aligned, flip any axis whose +neighbor is found on
//!    the - face
//! 
//! It is a best-effort repair. Ambiguous data leads to a guess that is
//! reported as a [`ReorderWarning`], never to a hard failure.

use tracing::{debug, warn};

use super::connectivity::HEXAHEDRON_FACES;
use super::explicit::{ExplicitStructuredGrid, Hexahedron, CORNER_OFFSETS};
use crate::error::ReorderWarning;

/// Corner index with the given (di, dj, dk) offsets
fn corner_index(offsets: [usize; 3]) -> usize {
    CORNER_OFFSETS
        .iter()
        .position(|&o| o == offsets)
        .unwrap_or(0)
}

/// Whether a cell repeats a point id
fn is_degenerate(cell: &Hexahedron) -> bool {
    let mut ids = *cell;
    ids.sort_unstable();
    ids.windows(2).any(|w| w[0] == w[1])
}

/// Corner permutation: new corner `c` takes old corner `map[c]`
fn corner_map(physical_offsets: impl Fn([usize; 3]) -> [usize; 3]) -> [usize; 8] {
    let mut map = [0; 8];
    for (corner, &logical) in CORNER_OFFSETS.iter().enumerate() {
        map[corner] = corner_index(physical_offsets(logical));
    }
    map
}

/// Map each logical axis to a face pair, filling gaps with the lowest unused pair
/// 
/// Returns the assignment and the axes that had to be guessed.
pub(crate) fn compute_swap_flag(found_faces: &[Option<usize>; 3]) -> ([usize; 3], Vec<usize>) {
    let mut assigned = [usize::MAX; 3];
    let mut used = [false; 3];
    let mut unresolved = Vec::new();
    
    for axis in 0..3 {
        match found_faces[axis].map(|face| face / 2) {
            Some(pair) if !used[pair] => {
                assigned[axis] = pair;
                used[pair] = true;
            }
            _ => unresolved.push(axis),
        }
    }
    
    for &axis in &unresolved {
        let pair = (0..3).find(|&p| !used[p]).unwrap_or(axis);
        assigned[axis] = pair;
        used[pair] = true;
    }
    
    (assigned, unresolved)
}

/// Axes whose +neighbor sits across the - face of the matching pair
pub(crate) fn compute_mirror_flag(found_faces: &[Option<usize>; 3]) -> [bool; 3] {
    let mut mirrored = [false; 3];
    for axis in 0..3 {
        mirrored[axis] = found_faces[axis] == Some(2 * axis);
    }
    mirrored
}

impl ExplicitStructuredGrid {
    /// Fix corner orders so the face table agrees with the i-j-k topology
    /// 
    /// Extent and cells must be set beforehand. Connectivity flags are
    /// invalidated when any cell changes and must be recomputed.
    /// 
    /// # Returns
    /// `Ok(())` when all three axes were detected on valid cells; otherwise a
    /// warning describing the guess. The grid is repaired as far as possible
    /// in both cases.
    pub fn check_and_reorder_faces(&mut self) -> Result<(), ReorderWarning> {
        let swap = self.internal_check_and_reorder_faces(true);
        let mirror = self.internal_check_and_reorder_faces(false);
        
        let degenerate = self.cells().iter().filter(|cell| is_degenerate(cell)).count();
        if degenerate > 0 {
            warn!(degenerate, "cells with repeated points were reordered blindly");
        }
        
        swap.and(mirror)?;
        if degenerate > 0 {
            return Err(ReorderWarning::DegenerateCells(degenerate));
        }
        Ok(())
    }
    
    fn internal_check_and_reorder_faces(&mut self, swap: bool) -> Result<(), ReorderWarning> {
        let found_faces = self.detect_axis_faces();
        
        if swap {
            let (assigned, unresolved) = compute_swap_flag(&found_faces);
            if assigned != [0, 1, 2] {
                debug!(?assigned, "swapping cell axes");
                self.reorder_cells_points(&corner_map(|logical| {
                    let mut physical = [0; 3];
                    for axis in 0..3 {
                        physical[assigned[axis]] = logical[axis];
                    }
                    physical
                }));
            }
            
            if !unresolved.is_empty() {
                warn!(?unresolved, ?assigned, "no connected face pair found, assuming lowest unused");
                return Err(ReorderWarning::UnresolvedAxes {
                    axes: unresolved,
                    assumed: assigned,
                });
            }
        } else {
            let mirrored = compute_mirror_flag(&found_faces);
            if mirrored.iter().any(|&m| m) {
                debug!(?mirrored, "mirroring cell axes");
                self.reorder_cells_points(&corner_map(|logical| {
                    let mut physical = logical;
                    for axis in 0..3 {
                        if mirrored[axis] {
                            physical[axis] = 1 - logical[axis];
                        }
                    }
                    physical
                }));
            }
        }
        
        Ok(())
    }
    
    /// For each logical axis, the face of a cell that its +1 neighbor shares
    /// 
    /// Blanked and degenerate cells are skipped; the scan stops once all
    /// three axes are found.
    fn detect_axis_faces(&self) -> [Option<usize>; 3] {
        let mut found = [None; 3];
        
        for cell_id in 0..self.number_of_cells() {
            if found.iter().all(Option::is_some) {
                break;
            }
            if !self.is_cell_visible(cell_id) {
                continue;
            }
            let (Some(cell), Some(ijk)) = (
                self.cell_points(cell_id),
                self.compute_cell_structured_coords(cell_id, false),
            ) else {
                continue;
            };
            if is_degenerate(cell) {
                continue;
            }
            
            for axis in 0..3 {
                if found[axis].is_some() {
                    continue;
                }
                
                let mut next = ijk;
                next[axis] += 1;
                let Some(neighbor_id) = self.compute_cell_id(next, false) else {
                    continue;
                };
                if !self.is_cell_visible(neighbor_id) {
                    continue;
                }
                let Some(neighbor) = self.cell_points(neighbor_id) else {
                    continue;
                };
                
                found[axis] = HEXAHEDRON_FACES
                    .iter()
                    .position(|face| face.iter().all(|&corner| neighbor.contains(&cell[corner])));
            }
        }
        
        found
    }
    
    /// Permute the corners of every cell: new corner `c` takes old corner `map[c]`
    pub(crate) fn reorder_cells_points(&mut self, map: &[usize; 8]) {
        for cell in self.cells_mut() {
            let old = *cell;
            for (corner, &source) in map.iter().enumerate() {
                cell[corner] = old[source];
            }
        }
        self.invalidate_topology();
    }
}
