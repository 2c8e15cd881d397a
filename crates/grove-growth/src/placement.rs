//! Where saplings may be planted and whether they may stay.

use grove_blocks::BlockId;
use grove_geom::{Coord, Dir};
use grove_world::Grid;

use crate::roles::GrowthBlocks;
use crate::variant::SaplingVariant;

/// Kind of block directly beneath a sapling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SubstrateClass {
    /// Grass, dirt, or tilled soil.
    OrdinarySoil,
    /// Sacred grass or sacred dirt.
    SpecialSoil,
    Other,
}

#[derive(Clone, Copy, Debug)]
pub struct PlacementValidator {
    blocks: GrowthBlocks,
    min_light: u8,
}

impl PlacementValidator {
    pub fn new(blocks: GrowthBlocks, min_light: u8) -> Self {
        Self { blocks, min_light }
    }

    pub fn blocks(&self) -> &GrowthBlocks {
        &self.blocks
    }

    pub fn substrate_class(&self, id: BlockId) -> SubstrateClass {
        let b = &self.blocks;
        if id == b.grass || id == b.dirt || id == b.tilled_soil {
            SubstrateClass::OrdinarySoil
        } else if id == b.sacred_grass || id == b.sacred_dirt {
            SubstrateClass::SpecialSoil
        } else {
            SubstrateClass::Other
        }
    }

    /// Class of the cell beneath `at`; absent cells are `Other`.
    pub fn classify(&self, grid: &dyn Grid, at: Coord) -> SubstrateClass {
        at.checked_offset(Dir::Down)
            .and_then(|below| grid.block_id(below))
            .map(|id| self.substrate_class(id))
            .unwrap_or(SubstrateClass::Other)
    }

    /// Substrate table without the generic sustain fallback.
    pub fn accepts_substrate(&self, id: BlockId, variant: SaplingVariant) -> bool {
        match (variant.is_sacred(), self.substrate_class(id)) {
            (true, SubstrateClass::SpecialSoil) => true,
            (false, SubstrateClass::OrdinarySoil) => true,
            _ => false,
        }
    }

    /// Whether a sapling of `variant` may be planted at `at`.
    pub fn can_sustain(&self, grid: &dyn Grid, at: Coord, variant: SaplingVariant) -> bool {
        let Some(below) = at.checked_offset(Dir::Down) else {
            return false;
        };
        let Some(soil) = grid.block(below) else {
            return false;
        };
        if soil.is_air() {
            return false;
        }
        if self.accepts_substrate(soil.id, variant) {
            return true;
        }
        !variant.is_sacred() && grid.can_sustain_plant(below, Dir::Up)
    }

    /// Whether the sapling already at `at` may stay planted.
    pub fn can_remain(&self, grid: &dyn Grid, at: Coord) -> bool {
        let Some(sapling) = grid.block(at) else {
            return false;
        };
        let variant = SaplingVariant::from_state(sapling.state);
        let lit = grid.light_level(at) >= self.min_light || grid.sees_sky(at);
        if !lit {
            return false;
        }
        let Some(below) = at.checked_offset(Dir::Down) else {
            return false;
        };
        let soil = match grid.block(below) {
            Some(b) if !b.is_air() => b,
            _ => return false,
        };
        grid.can_sustain_plant(below, Dir::Up)
            || (variant.is_sacred() && soil.id == self.blocks.sacred_grass)
    }
}
