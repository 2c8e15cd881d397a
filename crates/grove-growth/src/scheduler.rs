use grove_blocks::BlockRegistry;
use grove_geom::{Coord, Dir};
use grove_structures::GrowthRng;
use grove_world::Grid;

use crate::dispatch::VariantDispatcher;
use crate::error::GrowthError;
use crate::executor::GrowthExecutor;
use crate::outcome::{GrowthOutcome, SkipReason};
use crate::params::GrowthParams;
use crate::placement::PlacementValidator;
use crate::roles::{GrowthBlocks, RoleNames};
use crate::variant::SaplingVariant;

/// Per-tick growth entry point for sapling cells.
///
/// Callers run this only where they own the world state (never on a
/// replica). Draws are consumed in a fixed order: the gate, then the
/// family's form draw, then whatever the generator draws.
pub struct GrowthScheduler {
    params: GrowthParams,
    validator: PlacementValidator,
    dispatcher: VariantDispatcher,
    executor: GrowthExecutor,
}

impl GrowthScheduler {
    pub fn new(blocks: GrowthBlocks, params: GrowthParams, dispatcher: VariantDispatcher) -> Self {
        Self {
            params,
            validator: PlacementValidator::new(blocks, params.min_light_to_stay),
            dispatcher,
            executor: GrowthExecutor,
        }
    }

    pub fn from_registry(
        reg: &BlockRegistry,
        roles: &RoleNames,
        params: GrowthParams,
    ) -> Result<Self, GrowthError> {
        let blocks = GrowthBlocks::resolve(reg, roles)?;
        Ok(Self::new(blocks, params, VariantDispatcher::from_registry(reg)))
    }

    pub fn params(&self) -> &GrowthParams {
        &self.params
    }

    pub fn validator(&self) -> &PlacementValidator {
        &self.validator
    }

    pub fn dispatcher(&self) -> &VariantDispatcher {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut VariantDispatcher {
        &mut self.dispatcher
    }

    fn sapling_variant(&self, grid: &dyn Grid, at: Coord) -> Option<SaplingVariant> {
        grid.block(at)
            .filter(|b| b.id == self.validator.blocks().sapling)
            .map(|b| SaplingVariant::from_state(b.state))
    }

    pub fn on_tick(
        &self,
        grid: &mut dyn Grid,
        at: Coord,
        rng: &mut dyn GrowthRng,
    ) -> GrowthOutcome {
        let Some(variant) = self.sapling_variant(&*grid, at) else {
            return GrowthOutcome::NoAttempt(SkipReason::NotASapling);
        };
        if !self.validator.can_remain(&*grid, at) {
            log::debug!(target: "growth", "{} sapling at {} can no longer stay; removing", variant, at);
            grid.clear(at);
            return GrowthOutcome::NoAttempt(SkipReason::Unsustainable);
        }
        // A sapling at the top of the coordinate space has no cell above it.
        let light = at
            .checked_offset(Dir::Up)
            .map(|above| grid.light_level(above))
            .unwrap_or(0);
        if light < self.params.min_light_to_grow {
            log::trace!(target: "growth", "{} sapling at {} too dark ({})", variant, at, light);
            return GrowthOutcome::NoAttempt(SkipReason::TooDark);
        }
        if rng.roll(self.params.growth_chance) != 0 {
            return GrowthOutcome::NoAttempt(SkipReason::GateClosed);
        }
        self.attempt(grid, at, variant, rng)
    }

    /// Grows the sapling at `at` now, skipping the light and gate checks.
    pub fn grow(&self, grid: &mut dyn Grid, at: Coord, rng: &mut dyn GrowthRng) -> GrowthOutcome {
        match self.sapling_variant(&*grid, at) {
            Some(variant) => self.attempt(grid, at, variant, rng),
            None => GrowthOutcome::NoAttempt(SkipReason::NotASapling),
        }
    }

    fn attempt(
        &self,
        grid: &mut dyn Grid,
        at: Coord,
        variant: SaplingVariant,
        rng: &mut dyn GrowthRng,
    ) -> GrowthOutcome {
        let Some(generator) = self.dispatcher.select(variant, rng) else {
            return GrowthOutcome::NoAttempt(SkipReason::NoGenerator);
        };
        log::trace!(target: "growth", "{} sapling at {} trying {}", variant, at, generator.name());
        self.executor.attempt(grid, at, generator, rng)
    }
}
