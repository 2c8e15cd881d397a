use std::path::Path;

use grove_growth::{GrowthParams, RoleNames};
use serde::Deserialize;

/// Top-level `grove.toml`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GroveConfig {
    #[serde(default)]
    pub growth: GrowthParams,
    #[serde(default)]
    pub roles: RoleNames,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Layout of the demo plot: one sapling per variant in a row along +x.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_ticks")]
    pub ticks: u32,
    #[serde(default = "default_spacing")]
    pub spacing: i32,
    /// Vertical extent of the grid; the ground sits at y=0.
    #[serde(default = "default_height")]
    pub height: i32,
}

fn default_seed() -> u64 {
    1337
}
fn default_ticks() -> u32 {
    200
}
fn default_spacing() -> i32 {
    8
}
fn default_height() -> i32 {
    48
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            ticks: default_ticks(),
            spacing: default_spacing(),
            height: default_height(),
        }
    }
}

pub fn parse_config(s: &str) -> Result<GroveConfig, String> {
    toml::from_str(s).map_err(|e| format!("parse error: {}", e))
}

pub fn load_config_from_path(path: &Path) -> Result<GroveConfig, String> {
    let s = std::fs::read_to_string(path).map_err(|e| format!("read error: {}", e))?;
    parse_config(&s)
}
