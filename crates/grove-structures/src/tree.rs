use grove_blocks::Block;
use grove_geom::{Coord, Dir};
use grove_world::{BlockUpdate, Grid};

use crate::forms::Canopy;
use crate::rng::GrowthRng;
use crate::StructureGenerator;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Part {
    Leaves,
    Branch,
}

/// Straight-trunk tree with a configurable canopy.
#[derive(Clone, Debug)]
pub struct TreeGenerator {
    name: String,
    trunk: Block,
    leaves: Option<Block>,
    trunk_min: i32,
    trunk_extra: u32,
    canopy: Canopy,
}

impl TreeGenerator {
    pub fn new(
        name: impl Into<String>,
        trunk: Block,
        leaves: Option<Block>,
        trunk_min: i32,
        trunk_extra: u32,
        canopy: Canopy,
    ) -> Self {
        Self {
            name: name.into(),
            trunk,
            leaves,
            trunk_min: trunk_min.max(1),
            trunk_extra,
            canopy,
        }
    }

    /// Cells the canopy reaches above the trunk top.
    fn headroom(&self) -> i32 {
        match self.canopy {
            Canopy::Blob { .. } | Canopy::Cone { .. } | Canopy::Tuft => 1,
            Canopy::Dome { radius } => (radius - 1).max(0),
            Canopy::Bare => 0,
        }
    }

    /// Horizontal distance the crown spreads from the trunk.
    fn reach(&self) -> i32 {
        match self.canopy {
            Canopy::Blob { radius } | Canopy::Cone { radius } | Canopy::Dome { radius } => radius,
            Canopy::Tuft | Canopy::Bare => 1,
        }
    }

    fn crown(&self, top: Coord) -> Vec<(Coord, Part)> {
        let mut out = Vec::new();
        // Trunk column at or below the top stays wood.
        let on_trunk = |dx: i32, dy: i32, dz: i32| dx == 0 && dz == 0 && dy <= 0;
        match self.canopy {
            Canopy::Blob { radius } => {
                for dy in -2..=1 {
                    let rad = if dy < 0 { radius } else { (radius - 1).max(1) };
                    for dz in -rad..=rad {
                        for dx in -rad..=rad {
                            if on_trunk(dx, dy, dz) {
                                continue;
                            }
                            if dy >= 0 && dx.abs() == rad && dz.abs() == rad {
                                continue;
                            }
                            out.push((top + Coord::new(dx, dy, dz), Part::Leaves));
                        }
                    }
                }
            }
            Canopy::Cone { radius } => {
                for i in 0..=(2 * radius) {
                    let dy = 1 - i;
                    let rad = ((i + 1) / 2).min(radius);
                    for dz in -rad..=rad {
                        for dx in -rad..=rad {
                            if on_trunk(dx, dy, dz) || dx.abs() + dz.abs() > rad {
                                continue;
                            }
                            out.push((top + Coord::new(dx, dy, dz), Part::Leaves));
                        }
                    }
                }
            }
            Canopy::Dome { radius } => {
                let r2 = radius * radius;
                for dy in -1..radius {
                    for dz in -radius..=radius {
                        for dx in -radius..=radius {
                            if on_trunk(dx, dy, dz) || dx * dx + dy * dy + dz * dz > r2 {
                                continue;
                            }
                            out.push((top + Coord::new(dx, dy, dz), Part::Leaves));
                        }
                    }
                }
            }
            Canopy::Tuft => {
                out.push((top.above(), Part::Leaves));
                for level in [top, top.below()] {
                    for d in Dir::HORIZONTAL {
                        out.push((level.offset(d), Part::Leaves));
                    }
                }
            }
            Canopy::Bare => {
                out.push((top.offset(Dir::East), Part::Branch));
                out.push((top.below().offset(Dir::West), Part::Branch));
            }
        }
        out
    }
}

impl StructureGenerator for TreeGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate(&self, grid: &mut dyn Grid, rng: &mut dyn GrowthRng, origin: Coord) -> bool {
        let height = self.trunk_min + rng.roll(self.trunk_extra + 1) as i32;
        let span = Coord::new(self.reach(), height + self.headroom(), self.reach());
        if origin.checked_add(span).is_none() || origin.checked_sub(span).is_none() {
            log::trace!("{}: too close to the coordinate limit at {}", self.name, origin);
            return false;
        }
        let soil = origin.below();
        if grid.block(soil).is_none() || grid.is_replaceable(soil) {
            log::trace!("{}: no footing at {}", self.name, origin);
            return false;
        }
        let top = origin + Coord::new(0, height - 1, 0);
        if grid.block(top + Coord::new(0, self.headroom(), 0)).is_none() {
            log::trace!("{}: height {} leaves the grid at {}", self.name, height, origin);
            return false;
        }
        let trunk: Vec<Coord> = (0..height).map(|y| origin + Coord::new(0, y, 0)).collect();
        if let Some(blocked) = trunk.iter().find(|at| !grid.is_replaceable(**at)) {
            log::trace!("{}: trunk obstructed at {}", self.name, blocked);
            return false;
        }

        for at in &trunk {
            grid.set_block(*at, self.trunk, BlockUpdate::Quiet);
        }
        for (at, part) in self.crown(top) {
            let block = match part {
                Part::Leaves => match self.leaves {
                    Some(b) => b,
                    None => continue,
                },
                Part::Branch => self.trunk,
            };
            if grid.is_replaceable(at) {
                grid.set_block(at, block, BlockUpdate::Quiet);
            }
        }
        true
    }
}
