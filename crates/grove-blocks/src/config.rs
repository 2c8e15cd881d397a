use serde::Deserialize;

// Top-level blocks config file
#[derive(Deserialize, Debug, Clone)]
pub struct BlocksConfig {
    pub blocks: Vec<BlockDef>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct BlockDef {
    pub name: String,
    #[serde(default)]
    pub id: Option<u16>,
    #[serde(default)]
    pub solid: Option<bool>,
    // Defaults to `solid` when absent.
    #[serde(default)]
    pub blocks_skylight: Option<bool>,
    #[serde(default)]
    pub emission: Option<u8>,
    // Whether structures may overwrite this block. Defaults to `!solid`.
    #[serde(default)]
    pub replaceable: Option<bool>,
    // Whether a plant may root on top of this block.
    #[serde(default)]
    pub sustains_plants: Option<bool>,
}

impl BlockDef {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}
