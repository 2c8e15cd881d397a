use grove_blocks::Block;
use grove_geom::Coord;
use grove_structures::{GrowthRng, StructureGenerator};
use grove_world::{BlockUpdate, Grid};

use crate::outcome::{GrowthOutcome, SkipReason};

/// Clears a cell and puts the saved block back on drop unless committed.
struct CellRollback<'g> {
    grid: &'g mut dyn Grid,
    at: Coord,
    saved: Block,
    armed: bool,
}

impl<'g> CellRollback<'g> {
    fn clear(grid: &'g mut dyn Grid, at: Coord, saved: Block) -> Self {
        grid.clear(at);
        Self {
            grid,
            at,
            saved,
            armed: true,
        }
    }

    fn commit(mut self) {
        self.armed = false;
    }
}

impl Drop for CellRollback<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.grid.set_block(self.at, self.saved, BlockUpdate::Quiet);
        }
    }
}

/// Replaces a sapling with a generated structure, or leaves it as it was.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrowthExecutor;

impl GrowthExecutor {
    pub fn attempt(
        &self,
        grid: &mut dyn Grid,
        at: Coord,
        generator: &dyn StructureGenerator,
        rng: &mut dyn GrowthRng,
    ) -> GrowthOutcome {
        let Some(saved) = grid.block(at) else {
            return GrowthOutcome::NoAttempt(SkipReason::MissingCell);
        };
        let mut rollback = CellRollback::clear(grid, at, saved);
        if generator.generate(&mut *rollback.grid, rng, at) {
            rollback.commit();
            log::debug!(target: "growth", "{} grew at {}", generator.name(), at);
            GrowthOutcome::Succeeded
        } else {
            drop(rollback);
            log::debug!(target: "growth", "{} did not fit at {}; sapling restored", generator.name(), at);
            GrowthOutcome::Failed
        }
    }
}
