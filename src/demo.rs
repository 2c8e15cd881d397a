//! A flat test plot with one sapling of every variant.

use std::collections::BTreeMap;
use std::sync::Arc;

use grove_blocks::{Block, BlockRegistry};
use grove_geom::Coord;
use grove_growth::{GrowthOutcome, GrowthScheduler, SaplingVariant, SkipReason};
use grove_structures::GrowthRng;
use grove_world::{BlockUpdate, Grid, VoxelGrid};

use crate::config::DemoConfig;

/// What happened to one sapling over the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub grown_at: Option<u32>,
    pub failed: u32,
    pub gate_closed: u32,
    pub too_dark: u32,
    pub removed: bool,
}

impl Tally {
    fn record(&mut self, tick: u32, outcome: GrowthOutcome) {
        match outcome {
            GrowthOutcome::Succeeded => self.grown_at = Some(tick),
            GrowthOutcome::Failed => self.failed += 1,
            GrowthOutcome::NoAttempt(SkipReason::GateClosed) => self.gate_closed += 1,
            GrowthOutcome::NoAttempt(SkipReason::TooDark) => self.too_dark += 1,
            GrowthOutcome::NoAttempt(SkipReason::Unsustainable) => self.removed = true,
            GrowthOutcome::NoAttempt(_) => {}
        }
    }

    /// Whether this sapling still needs ticking.
    pub fn pending(&self) -> bool {
        self.grown_at.is_none() && !self.removed
    }
}

pub struct Plot {
    pub grid: VoxelGrid,
    pub saplings: Vec<(SaplingVariant, Coord)>,
}

impl Plot {
    /// Lays a grass strip at y=0 and plants every variant on it, each on the
    /// substrate it accepts. Variants that cannot be planted are skipped.
    pub fn plant(
        reg: Arc<BlockRegistry>,
        scheduler: &GrowthScheduler,
        cfg: &DemoConfig,
    ) -> Self {
        let mut grid = VoxelGrid::new(reg, 0, cfg.height.max(2));
        let blocks = *scheduler.validator().blocks();
        let spacing = cfg.spacing.max(1);
        let last = spacing * (SaplingVariant::COUNT as i32 - 1);
        grid.fill(
            Coord::new(-spacing, 0, -spacing),
            Coord::new(last + spacing, 0, spacing),
            Block::of(blocks.grass),
        );

        let mut saplings = Vec::new();
        for (i, variant) in SaplingVariant::all().enumerate() {
            let at = Coord::new(i as i32 * spacing, 1, 0);
            if variant.is_sacred() {
                grid.set_block(at.below(), Block::of(blocks.sacred_grass), BlockUpdate::Quiet);
            }
            if !scheduler.validator().can_sustain(&grid, at, variant) {
                log::warn!("cannot plant {} sapling at {}", variant, at);
                continue;
            }
            grid.set_block(at, Block::new(blocks.sapling, variant.state()), BlockUpdate::Notify);
            saplings.push((variant, at));
        }
        log::info!("planted {} saplings", saplings.len());
        Self { grid, saplings }
    }

    /// Ticks every pending sapling once per round for `ticks` rounds.
    pub fn run(
        &mut self,
        scheduler: &GrowthScheduler,
        rng: &mut dyn GrowthRng,
        ticks: u32,
    ) -> BTreeMap<SaplingVariant, Tally> {
        let mut tallies: BTreeMap<SaplingVariant, Tally> = self
            .saplings
            .iter()
            .map(|(v, _)| (*v, Tally::default()))
            .collect();
        for tick in 0..ticks {
            for (variant, at) in &self.saplings {
                let Some(tally) = tallies.get_mut(variant) else {
                    continue;
                };
                if !tally.pending() {
                    continue;
                }
                let outcome = scheduler.on_tick(&mut self.grid, *at, rng);
                if outcome.attempted() {
                    log::info!("tick {}: {} sapling at {} {}", tick, variant, at, outcome);
                }
                tally.record(tick, outcome);
            }
            if tallies.values().all(|t| !t.pending()) {
                log::debug!("every sapling settled after {} ticks", tick + 1);
                break;
            }
        }
        tallies
    }
}
