use serde::Deserialize;

/// Light thresholds and growth odds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct GrowthParams {
    /// Light at the sapling below which it needs sky view to stay planted.
    #[serde(default = "default_min_light_to_stay")]
    pub min_light_to_stay: u8,
    /// Light above the sapling required before the gate is rolled.
    #[serde(default = "default_min_light_to_grow")]
    pub min_light_to_grow: u8,
    /// An eligible tick grows with probability `1 / growth_chance`.
    #[serde(default = "default_growth_chance")]
    pub growth_chance: u32,
}

fn default_min_light_to_stay() -> u8 {
    8
}
fn default_min_light_to_grow() -> u8 {
    9
}
fn default_growth_chance() -> u32 {
    7
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            min_light_to_stay: default_min_light_to_stay(),
            min_light_to_grow: default_min_light_to_grow(),
            growth_chance: default_growth_chance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let p: GrowthParams = toml::from_str("growth_chance = 3").unwrap();
        assert_eq!(p.growth_chance, 3);
        assert_eq!(p.min_light_to_stay, 8);
        assert_eq!(p.min_light_to_grow, 9);
        let empty: GrowthParams = toml::from_str("").unwrap();
        assert_eq!(empty, GrowthParams::default());
    }
}
