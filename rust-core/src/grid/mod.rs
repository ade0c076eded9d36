//! Explicit structured grid topology engine

pub mod extent;
pub mod explicit;
pub mod connectivity;
pub mod reorder;
pub mod crop;

pub use extent::Extent;
pub use explicit::{
    CellId, ExplicitStructuredGrid, Hexahedron, PointId, DEFAULT_CONNECTIVITY_FLAGS_NAME,
    DUPLICATE_CELL, HIDDEN_CELL,
};
pub use connectivity::{opposite_face, HEXAHEDRON_FACES};
pub use crop::CroppedGrid;
