use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use super::config::{BlockDef, BlocksConfig};
use super::types::{Block, BlockId};

/// Resolved properties of a single block type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockType {
    pub id: BlockId,
    pub name: String,
    pub solid: bool,
    pub blocks_skylight: bool,
    pub emission: u8,
    pub replaceable: bool,
    pub sustains_plants: bool,
}

impl BlockType {
    // Fills id gaps left by sparse explicit ids.
    fn placeholder(id: BlockId) -> Self {
        Self {
            id,
            name: String::new(),
            solid: false,
            blocks_skylight: false,
            emission: 0,
            replaceable: false,
            sustains_plants: false,
        }
    }

    #[inline]
    fn is_placeholder(&self) -> bool {
        self.name.is_empty()
    }

    fn from_def(id: BlockId, def: BlockDef) -> Self {
        let solid = def.solid.unwrap_or(true);
        Self {
            id,
            blocks_skylight: def.blocks_skylight.unwrap_or(solid),
            emission: def.emission.unwrap_or(0).min(15),
            replaceable: def.replaceable.unwrap_or(!solid),
            sustains_plants: def.sustains_plants.unwrap_or(false),
            name: def.name,
            solid,
        }
    }
}

#[derive(Debug)]
pub enum RegistryError {
    DuplicateName(String),
    DuplicateId { id: BlockId, first: String, second: String },
    MissingAir,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateName(name) => write!(f, "block '{}' defined twice", name),
            RegistryError::DuplicateId { id, first, second } => {
                write!(f, "block id {} used by both '{}' and '{}'", id, first, second)
            }
            RegistryError::MissingAir => write!(f, "block id 0 must be 'air'"),
        }
    }
}

impl Error for RegistryError {}

#[derive(Default, Clone, Debug)]
pub struct BlockRegistry {
    blocks: Vec<BlockType>,
    by_name: HashMap<String, BlockId>,
}

impl BlockRegistry {
    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.blocks
            .get(id as usize)
            .filter(|ty| !ty.is_placeholder())
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    pub fn block_by_name(&self, name: &str) -> Option<Block> {
        self.id_by_name(name).map(Block::of)
    }

    pub fn name_of(&self, id: BlockId) -> Option<&str> {
        self.get(id).map(|ty| ty.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockType> {
        self.blocks.iter().filter(|ty| !ty.is_placeholder())
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: BlocksConfig = toml::from_str(toml_str)?;
        Ok(Self::from_config(cfg)?)
    }

    pub fn from_config(cfg: BlocksConfig) -> Result<Self, RegistryError> {
        let mut reg = BlockRegistry::default();
        for def in cfg.blocks.into_iter() {
            if reg.by_name.contains_key(&def.name) {
                return Err(RegistryError::DuplicateName(def.name));
            }
            let id = def.id.unwrap_or(reg.blocks.len() as u16);
            if let Some(existing) = reg.get(id) {
                return Err(RegistryError::DuplicateId {
                    id,
                    first: existing.name.clone(),
                    second: def.name,
                });
            }
            let ty = BlockType::from_def(id, def);
            if reg.blocks.len() <= id as usize {
                reg.blocks
                    .resize(id as usize + 1, BlockType::placeholder(id));
            }
            reg.by_name.insert(ty.name.clone(), id);
            reg.blocks[id as usize] = ty;
        }
        match reg.get(Block::AIR.id) {
            Some(ty) if ty.name == "air" => {}
            _ => return Err(RegistryError::MissingAir),
        }
        log::debug!("block registry loaded with {} types", reg.len());
        Ok(reg)
    }
}
