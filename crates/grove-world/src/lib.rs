//! Grid access trait and the in-memory reference grid.
#![forbid(unsafe_code)]

pub mod grid;
pub mod voxel;

pub use grid::{BlockUpdate, Grid, MAX_LIGHT};
pub use voxel::{VoxelGrid, VoxelGridStats};
