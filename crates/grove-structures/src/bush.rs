use grove_blocks::Block;
use grove_geom::Coord;
use grove_world::{BlockUpdate, Grid};

use crate::rng::GrowthRng;
use crate::StructureGenerator;

/// One-block stem buried in a ball of leaves.
#[derive(Clone, Debug)]
pub struct BushGenerator {
    name: String,
    stem: Block,
    leaves: Block,
    max_radius: u32,
}

impl BushGenerator {
    pub fn new(name: impl Into<String>, stem: Block, leaves: Block, max_radius: u32) -> Self {
        Self {
            name: name.into(),
            stem,
            leaves,
            max_radius: max_radius.max(1),
        }
    }
}

impl StructureGenerator for BushGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate(&self, grid: &mut dyn Grid, rng: &mut dyn GrowthRng, origin: Coord) -> bool {
        let radius = 1 + rng.roll(self.max_radius) as i32;
        let span = Coord::new(radius, radius + 1, radius);
        if origin.checked_add(span).is_none() || origin.checked_sub(span).is_none() {
            return false;
        }
        let soil = origin.below();
        if grid.block(soil).is_none() || grid.is_replaceable(soil) || !grid.is_replaceable(origin)
        {
            return false;
        }

        grid.set_block(origin, self.stem, BlockUpdate::Quiet);
        let center = origin.above();
        for dy in -radius..=radius {
            for dz in -radius..=radius {
                for dx in -radius..=radius {
                    if dx.abs() + dy.abs() + dz.abs() > radius {
                        continue;
                    }
                    let at = center + Coord::new(dx, dy, dz);
                    if grid.is_replaceable(at) {
                        grid.set_block(at, self.leaves, BlockUpdate::Quiet);
                    }
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;
    use grove_blocks::config::{BlockDef, BlocksConfig};
    use grove_blocks::BlockRegistry;
    use grove_world::VoxelGrid;
    use std::sync::Arc;

    fn make_grid() -> VoxelGrid {
        let blocks = vec![
            BlockDef {
                solid: Some(false),
                ..BlockDef::named("air")
            },
            BlockDef::named("netherrack"),
            BlockDef::named("stem"),
            BlockDef {
                solid: Some(false),
                ..BlockDef::named("leaves")
            },
        ];
        let reg = Arc::new(BlockRegistry::from_config(BlocksConfig { blocks }).unwrap());
        let mut grid = VoxelGrid::new(reg, 0, 32);
        grid.fill(Coord::new(-4, 0, -4), Coord::new(4, 0, 4), Block::of(1));
        grid
    }

    #[test]
    fn ball_radius_is_drawn_once() {
        let mut grid = make_grid();
        let bush = BushGenerator::new("bush", Block::of(2), Block::of(3), 2);
        let mut rng = ScriptedRng::new([1]);
        assert!(bush.generate(&mut grid, &mut rng, Coord::new(0, 1, 0)));
        assert_eq!(rng.bounds(), &[2]);
        assert_eq!(grid.block(Coord::new(0, 1, 0)), Some(Block::of(2)));
        assert_eq!(grid.block(Coord::new(0, 4, 0)), Some(Block::of(3)));
        assert_eq!(grid.block(Coord::new(2, 2, 0)), Some(Block::of(3)));
        // The soil is not replaceable, so the ball never eats it
        assert_eq!(grid.block(Coord::new(0, 0, 0)), Some(Block::of(1)));
    }

    #[test]
    fn needs_solid_footing() {
        let mut grid = make_grid();
        let bush = BushGenerator::new("bush", Block::of(2), Block::of(3), 1);
        let mut rng = ScriptedRng::default();
        assert!(!bush.generate(&mut grid, &mut rng, Coord::new(0, 5, 0)));
        assert_eq!(grid.stats().stored_blocks, 81);
    }
}
