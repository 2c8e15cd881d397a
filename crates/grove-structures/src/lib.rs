//! Structure generators that replace a sapling with a grown structure.
#![forbid(unsafe_code)]

pub mod bush;
pub mod forms;
pub mod rng;
pub mod set;
pub mod tree;

use grove_geom::Coord;
use grove_world::Grid;

pub use bush::BushGenerator;
pub use forms::{Canopy, FormBlocks, FormShape, GeneratorForm};
pub use rng::{GrowthRng, RandSource, ScriptedRng};
pub use set::GeneratorSet;
pub use tree::TreeGenerator;

/// Something that can carve a structure rooted at a grid cell.
///
/// `generate` returns `false` when the structure does not fit. A generator
/// must check everything it needs before its first write, so that a failed
/// attempt leaves the grid untouched.
pub trait StructureGenerator {
    fn name(&self) -> &str;

    fn generate(&self, grid: &mut dyn Grid, rng: &mut dyn GrowthRng, origin: Coord) -> bool;
}
