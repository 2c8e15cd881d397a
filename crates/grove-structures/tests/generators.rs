use std::collections::HashMap;
use std::sync::Arc;

use grove_blocks::{Block, BlockRegistry};
use grove_geom::{Coord, Dir};
use grove_structures::{GeneratorForm, GeneratorSet, RandSource, ScriptedRng};
use grove_world::{BlockUpdate, Grid, VoxelGrid};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn registry() -> Arc<BlockRegistry> {
    Arc::new(
        BlockRegistry::load_from_path(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../assets/blocks.toml"
        ))
        .expect("bundled blocks.toml"),
    )
}

fn flat_grid(reg: &Arc<BlockRegistry>) -> VoxelGrid {
    let mut grid = VoxelGrid::new(reg.clone(), 0, 96);
    let grass = reg.block_by_name("grass").unwrap();
    grid.fill(Coord::new(-12, 0, -12), Coord::new(12, 0, 12), grass);
    grid
}

/// Unbounded grid: every coordinate exists, unset cells are air.
struct OpenGrid {
    cells: HashMap<Coord, Block>,
}

impl Grid for OpenGrid {
    fn block(&self, at: Coord) -> Option<Block> {
        Some(self.cells.get(&at).copied().unwrap_or(Block::AIR))
    }

    fn set_block(&mut self, at: Coord, block: Block, _update: BlockUpdate) {
        self.cells.insert(at, block);
    }

    fn light_level(&self, _at: Coord) -> u8 {
        15
    }

    fn sees_sky(&self, _at: Coord) -> bool {
        true
    }

    fn can_sustain_plant(&self, at: Coord, face: Dir) -> bool {
        face == Dir::Up && self.block(at).is_some_and(|b| !b.is_air())
    }

    fn is_replaceable(&self, at: Coord) -> bool {
        self.block(at).is_some_and(|b| b.is_air())
    }
}

#[test]
fn growth_at_the_coordinate_limit_fails_cleanly() {
    let reg = registry();
    let set = GeneratorSet::from_registry(&reg);
    let grass = reg.block_by_name("grass").unwrap();
    let edges = [
        Coord::new(0, i32::MAX, 0),
        Coord::new(0, i32::MAX - 1, 0),
        Coord::new(i32::MAX, 10, 0),
        Coord::new(0, 10, i32::MIN),
    ];
    for origin in edges {
        for form in GeneratorForm::ALL {
            let mut grid = OpenGrid {
                cells: HashMap::new(),
            };
            grid.set_block(origin.below(), grass, BlockUpdate::Quiet);
            let mut rng = ScriptedRng::new([0]);
            let grown = set.get(form).unwrap().generate(&mut grid, &mut rng, origin);
            assert!(!grown, "{} grew at {}", form, origin);
            assert_eq!(grid.cells.len(), 1, "{} wrote at {}", form, origin);
            assert_eq!(rng.draws(), 1);
        }
    }
}

#[test]
fn bundled_blocks_cover_every_form() {
    let set = GeneratorSet::from_registry(&registry());
    assert_eq!(set.len(), GeneratorForm::ALL.len());
    assert!(set.missing().is_empty());
    for form in GeneratorForm::ALL {
        assert_eq!(set.get(form).map(|g| g.name().to_string()), Some(form.name().into()));
    }
}

#[test]
fn unresolved_blocks_leave_forms_unmapped() {
    let reg = BlockRegistry::from_toml_str(
        r#"
        [[blocks]]
        name = "air"
        solid = false

        [[blocks]]
        name = "oak_log"

        [[blocks]]
        name = "apple_leaves"
        solid = false
    "#,
    )
    .unwrap();
    let set = GeneratorSet::from_registry(&reg);
    assert!(set.contains(GeneratorForm::Apple));
    assert!(!set.contains(GeneratorForm::Fir));
    assert_eq!(set.missing().len(), GeneratorForm::ALL.len() - 1);
}

#[test]
fn every_form_grows_on_open_ground() {
    let reg = registry();
    let set = GeneratorSet::from_registry(&reg);
    let mut rng = RandSource(ChaCha8Rng::seed_from_u64(11));
    for form in GeneratorForm::ALL {
        let mut grid = flat_grid(&reg);
        let origin = Coord::new(0, 1, 0);
        let generator = set.get(form).unwrap();
        assert!(generator.generate(&mut grid, &mut rng, origin), "{} failed", form);
        let trunk = reg.block_by_name(form.blocks().trunk).unwrap();
        assert_eq!(grid.block(origin), Some(trunk), "{}", form);
    }
}

#[test]
fn each_form_draws_once() {
    let reg = registry();
    let set = GeneratorSet::from_registry(&reg);
    for form in GeneratorForm::ALL {
        let mut grid = flat_grid(&reg);
        let mut rng = ScriptedRng::new([0]);
        set.get(form)
            .unwrap()
            .generate(&mut grid, &mut rng, Coord::new(0, 1, 0));
        assert_eq!(rng.draws(), 1, "{}", form);
    }
}

proptest! {
    // A blocked trunk never leaves partial structure behind.
    #[test]
    fn obstructed_growth_leaves_grid_untouched(
        form_idx in 0usize..GeneratorForm::ALL.len(),
        block_at in 1i32..4,
        seed in any::<u64>(),
    ) {
        let form = GeneratorForm::ALL[form_idx];
        prop_assume!(form != GeneratorForm::HellbarkBush || block_at == 1);
        let reg = registry();
        let set = GeneratorSet::from_registry(&reg);
        let mut grid = flat_grid(&reg);
        let stone = reg.block_by_name("stone").unwrap();
        let obstacle = Coord::new(0, block_at, 0);
        grid.set_block(obstacle, stone, BlockUpdate::Quiet);
        let before: Vec<Option<Block>> = (-6..=6)
            .flat_map(|x| (0..24).map(move |y| (x, y)))
            .flat_map(|(x, y)| (-6..=6).map(move |z| Coord::new(x, y, z)))
            .map(|at| grid.block(at))
            .collect();
        let mut rng = RandSource(ChaCha8Rng::seed_from_u64(seed));
        let grown = set.get(form).unwrap().generate(&mut grid, &mut rng, Coord::new(0, 1, 0));
        prop_assert!(!grown);
        let after: Vec<Option<Block>> = (-6..=6)
            .flat_map(|x| (0..24).map(move |y| (x, y)))
            .flat_map(|(x, y)| (-6..=6).map(move |z| Coord::new(x, y, z)))
            .map(|at| grid.block(at))
            .collect();
        prop_assert_eq!(before, after);
    }
}
