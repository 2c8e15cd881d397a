//! Static parameter rows for every structure form a sapling can grow into.
//!
//! Each form names the blocks it is built from and its shape. Trees draw
//! exactly one value per attempt (trunk height); bushes draw exactly one
//! value (ball radius).

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneratorForm {
    Apple,
    YellowAutumn,
    BambooShoot,
    BambooGrove,
    Mystic,
    OminousLarge,
    OminousSmall,
    Dead,
    Fir,
    Promised,
    OrangeAutumn,
    Origin,
    PinkCherry,
    Maple,
    WhiteCherry,
    HellbarkBush,
    Jacaranda,
    Persimmon,
}

/// Leaf arrangement around the top of the trunk.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Canopy {
    /// Two wide layers below the crown, two narrow trimmed layers at it.
    Blob { radius: i32 },
    /// Layers that widen downwards, capped at `radius`.
    Cone { radius: i32 },
    /// Half sphere sitting on the trunk top.
    Dome { radius: i32 },
    /// A small leaf cap hugging the trunk top.
    Tuft,
    /// No leaves; two short branches near the top.
    Bare,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormShape {
    Tree {
        trunk_min: i32,
        trunk_extra: u32,
        canopy: Canopy,
    },
    Bush {
        max_radius: u32,
    },
}

/// Block names a form is built from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FormBlocks {
    pub trunk: &'static str,
    pub leaves: Option<&'static str>,
}

const fn tree(trunk_min: i32, trunk_extra: u32, canopy: Canopy) -> FormShape {
    FormShape::Tree {
        trunk_min,
        trunk_extra,
        canopy,
    }
}

const fn blocks(trunk: &'static str, leaves: &'static str) -> FormBlocks {
    FormBlocks {
        trunk,
        leaves: Some(leaves),
    }
}

impl GeneratorForm {
    pub const ALL: [GeneratorForm; 18] = [
        GeneratorForm::Apple,
        GeneratorForm::YellowAutumn,
        GeneratorForm::BambooShoot,
        GeneratorForm::BambooGrove,
        GeneratorForm::Mystic,
        GeneratorForm::OminousLarge,
        GeneratorForm::OminousSmall,
        GeneratorForm::Dead,
        GeneratorForm::Fir,
        GeneratorForm::Promised,
        GeneratorForm::OrangeAutumn,
        GeneratorForm::Origin,
        GeneratorForm::PinkCherry,
        GeneratorForm::Maple,
        GeneratorForm::WhiteCherry,
        GeneratorForm::HellbarkBush,
        GeneratorForm::Jacaranda,
        GeneratorForm::Persimmon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GeneratorForm::Apple => "apple",
            GeneratorForm::YellowAutumn => "yellow_autumn",
            GeneratorForm::BambooShoot => "bamboo_shoot",
            GeneratorForm::BambooGrove => "bamboo_grove",
            GeneratorForm::Mystic => "mystic",
            GeneratorForm::OminousLarge => "ominous_large",
            GeneratorForm::OminousSmall => "ominous_small",
            GeneratorForm::Dead => "dead",
            GeneratorForm::Fir => "fir",
            GeneratorForm::Promised => "promised",
            GeneratorForm::OrangeAutumn => "orange_autumn",
            GeneratorForm::Origin => "origin",
            GeneratorForm::PinkCherry => "pink_cherry",
            GeneratorForm::Maple => "maple",
            GeneratorForm::WhiteCherry => "white_cherry",
            GeneratorForm::HellbarkBush => "hellbark_bush",
            GeneratorForm::Jacaranda => "jacaranda",
            GeneratorForm::Persimmon => "persimmon",
        }
    }

    pub fn shape(self) -> FormShape {
        use Canopy::*;
        match self {
            GeneratorForm::Apple => tree(4, 2, Blob { radius: 2 }),
            GeneratorForm::YellowAutumn => tree(5, 2, Blob { radius: 2 }),
            GeneratorForm::BambooShoot => tree(4, 3, Tuft),
            GeneratorForm::BambooGrove => tree(9, 4, Tuft),
            GeneratorForm::Mystic => tree(5, 2, Dome { radius: 2 }),
            GeneratorForm::OminousLarge => tree(8, 3, Dome { radius: 3 }),
            GeneratorForm::OminousSmall => tree(5, 1, Blob { radius: 2 }),
            GeneratorForm::Dead => tree(5, 3, Bare),
            GeneratorForm::Fir => tree(10, 5, Cone { radius: 3 }),
            GeneratorForm::Promised => tree(12, 5, Dome { radius: 4 }),
            GeneratorForm::OrangeAutumn => tree(5, 2, Blob { radius: 2 }),
            GeneratorForm::Origin => tree(4, 1, Blob { radius: 2 }),
            GeneratorForm::PinkCherry => tree(5, 2, Dome { radius: 3 }),
            GeneratorForm::Maple => tree(6, 2, Blob { radius: 3 }),
            GeneratorForm::WhiteCherry => tree(5, 2, Dome { radius: 3 }),
            GeneratorForm::HellbarkBush => FormShape::Bush { max_radius: 2 },
            GeneratorForm::Jacaranda => tree(6, 2, Dome { radius: 3 }),
            GeneratorForm::Persimmon => tree(5, 1, Blob { radius: 2 }),
        }
    }

    pub fn blocks(self) -> FormBlocks {
        match self {
            GeneratorForm::Apple => blocks("oak_log", "apple_leaves"),
            GeneratorForm::YellowAutumn => blocks("oak_log", "yellow_autumn_leaves"),
            GeneratorForm::BambooShoot | GeneratorForm::BambooGrove => {
                blocks("bamboo", "bamboo_leaves")
            }
            GeneratorForm::Mystic => blocks("magic_log", "magic_leaves"),
            GeneratorForm::OminousLarge | GeneratorForm::OminousSmall => {
                blocks("dark_log", "dark_leaves")
            }
            GeneratorForm::Dead => FormBlocks {
                trunk: "dead_log",
                leaves: None,
            },
            GeneratorForm::Fir => blocks("fir_log", "fir_leaves"),
            GeneratorForm::Promised => blocks("holy_log", "holy_leaves"),
            GeneratorForm::OrangeAutumn => blocks("oak_log", "orange_autumn_leaves"),
            GeneratorForm::Origin => blocks("oak_log", "origin_leaves"),
            GeneratorForm::PinkCherry => blocks("cherry_log", "pink_cherry_leaves"),
            GeneratorForm::Maple => blocks("oak_log", "maple_leaves"),
            GeneratorForm::WhiteCherry => blocks("cherry_log", "white_cherry_leaves"),
            GeneratorForm::HellbarkBush => blocks("hellbark_log", "hellbark_leaves"),
            GeneratorForm::Jacaranda => blocks("jacaranda_log", "jacaranda_leaves"),
            GeneratorForm::Persimmon => blocks("oak_log", "persimmon_leaves"),
        }
    }
}

impl fmt::Display for GeneratorForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = GeneratorForm::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names.len(), GeneratorForm::ALL.len());
    }

    #[test]
    fn every_tree_has_a_trunk_and_only_dead_trees_are_leafless() {
        for form in GeneratorForm::ALL {
            if let FormShape::Tree { trunk_min, .. } = form.shape() {
                assert!(trunk_min >= 3, "{} trunk too short", form);
            }
            let leafless = form.blocks().leaves.is_none();
            assert_eq!(leafless, form == GeneratorForm::Dead, "{}", form);
        }
    }

    #[test]
    fn only_hellbark_is_a_bush() {
        let bushes: Vec<_> = GeneratorForm::ALL
            .into_iter()
            .filter(|f| matches!(f.shape(), FormShape::Bush { .. }))
            .collect();
        assert_eq!(bushes, vec![GeneratorForm::HellbarkBush]);
    }
}
