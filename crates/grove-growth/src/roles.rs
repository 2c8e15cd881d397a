use grove_blocks::{BlockId, BlockRegistry};
use serde::Deserialize;

use crate::error::GrowthError;

/// Registry names of the blocks the placement rules care about.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RoleNames {
    pub grass: String,
    pub dirt: String,
    pub tilled_soil: String,
    pub sacred_grass: String,
    pub sacred_dirt: String,
    pub sapling: String,
}

impl Default for RoleNames {
    fn default() -> Self {
        Self {
            grass: "grass".into(),
            dirt: "dirt".into(),
            tilled_soil: "farmland".into(),
            sacred_grass: "holy_grass".into(),
            sacred_dirt: "holy_dirt".into(),
            sapling: "sapling".into(),
        }
    }
}

/// Resolved block ids for each role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthBlocks {
    pub grass: BlockId,
    pub dirt: BlockId,
    pub tilled_soil: BlockId,
    pub sacred_grass: BlockId,
    pub sacred_dirt: BlockId,
    pub sapling: BlockId,
}

impl GrowthBlocks {
    pub fn resolve(reg: &BlockRegistry, names: &RoleNames) -> Result<Self, GrowthError> {
        let lookup = |role: &'static str, name: &str| {
            reg.id_by_name(name).ok_or_else(|| GrowthError::UnknownBlock {
                role,
                name: name.to_string(),
            })
        };
        Ok(Self {
            grass: lookup("grass", &names.grass)?,
            dirt: lookup("dirt", &names.dirt)?,
            tilled_soil: lookup("tilled soil", &names.tilled_soil)?,
            sacred_grass: lookup("sacred grass", &names.sacred_grass)?,
            sacred_dirt: lookup("sacred dirt", &names.sacred_dirt)?,
            sapling: lookup("sapling", &names.sapling)?,
        })
    }
}
