use std::collections::HashMap;
use std::sync::Arc;

use grove_blocks::{Block, BlockRegistry, BlockType};
use grove_geom::{Coord, Dir};

use crate::grid::{BlockUpdate, Grid, MAX_LIGHT};

pub const CHUNK_SIZE: i32 = 16;

#[derive(Default, Debug, Clone, Copy)]
pub struct VoxelGridStats {
    pub chunk_entries: usize,
    pub stored_blocks: usize,
    pub light_overrides: usize,
    pub rev_entries: usize,
    pub built_entries: usize,
}

/// Sparse in-memory grid. Unstored cells inside the vertical bounds are air;
/// cells outside `min_y..max_y` are absent.
pub struct VoxelGrid {
    sx: i32,
    sy: i32,
    sz: i32,
    min_y: i32,
    max_y: i32,
    registry: Arc<BlockRegistry>,
    sky_light: u8,
    // Map per-chunk: key=(cx,cy,cz) -> map of world coords -> Block
    inner: HashMap<(i32, i32, i32), HashMap<Coord, Block>>,
    block_light: HashMap<Coord, u8>,
    // Change-tracking
    rev: HashMap<(i32, i32, i32), u64>,
    built: HashMap<(i32, i32, i32), u64>,
    counter: u64,
}

impl VoxelGrid {
    pub fn new(registry: Arc<BlockRegistry>, min_y: i32, max_y: i32) -> Self {
        Self::with_chunk_size(registry, min_y, max_y, CHUNK_SIZE)
    }

    pub fn with_chunk_size(
        registry: Arc<BlockRegistry>,
        min_y: i32,
        max_y: i32,
        chunk_size: i32,
    ) -> Self {
        let size = chunk_size.max(1);
        Self {
            sx: size,
            sy: size,
            sz: size,
            min_y,
            max_y: max_y.max(min_y),
            registry,
            sky_light: MAX_LIGHT,
            inner: HashMap::new(),
            block_light: HashMap::new(),
            rev: HashMap::new(),
            built: HashMap::new(),
            counter: 0,
        }
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    #[inline]
    pub fn in_bounds(&self, at: Coord) -> bool {
        at.y >= self.min_y && at.y < self.max_y
    }

    pub fn sky_light(&self) -> u8 {
        self.sky_light
    }

    /// Skylight level for cells that see the sky (e.g. lower at night).
    pub fn set_sky_light(&mut self, level: u8) {
        self.sky_light = level.min(MAX_LIGHT);
    }

    /// Pins the block light at a single cell, as if lit by an external source.
    pub fn set_block_light(&mut self, at: Coord, level: u8) {
        if level == 0 {
            self.block_light.remove(&at);
        } else {
            self.block_light.insert(at, level.min(MAX_LIGHT));
        }
    }

    pub fn fill(&mut self, from: Coord, to: Coord, block: Block) {
        for y in from.y.min(to.y)..=from.y.max(to.y) {
            for z in from.z.min(to.z)..=from.z.max(to.z) {
                for x in from.x.min(to.x)..=from.x.max(to.x) {
                    self.set_block(Coord::new(x, y, z), block, BlockUpdate::Quiet);
                }
            }
        }
    }

    pub fn stats(&self) -> VoxelGridStats {
        VoxelGridStats {
            chunk_entries: self.inner.len(),
            stored_blocks: self.inner.values().map(|m| m.len()).sum(),
            light_overrides: self.block_light.len(),
            rev_entries: self.rev.len(),
            built_entries: self.built.len(),
        }
    }

    #[inline]
    fn chunk_key(&self, at: Coord) -> (i32, i32, i32) {
        at.chunk_key(self.sx, self.sy, self.sz)
    }

    #[inline]
    fn block_type(&self, at: Coord) -> Option<&BlockType> {
        self.block(at).and_then(|b| self.registry.get(b.id))
    }

    fn emission_at(&self, at: Coord) -> u8 {
        self.block_type(at).map(|ty| ty.emission).unwrap_or(0)
    }

    fn bump(&mut self) -> u64 {
        self.counter = self.counter.wrapping_add(1).max(1);
        self.counter
    }

    /// Change-tracking: mark the chunk containing `at` and any immediate
    /// neighbours if the edit touches a border. Returns the new stamp.
    pub fn bump_region_around(&mut self, at: Coord) -> u64 {
        let stamp = self.bump();
        for key in self.affected_chunks(at) {
            self.rev.insert(key, stamp);
        }
        stamp
    }

    /// Chunks whose contents depend on the cell at `at`.
    pub fn affected_chunks(&self, at: Coord) -> Vec<(i32, i32, i32)> {
        let (cx, cy, cz) = self.chunk_key(at);
        let lx = at.x - cx * self.sx;
        let ly = at.y - cy * self.sy;
        let lz = at.z - cz * self.sz;

        let seam = |l: i32, size: i32| -> Vec<i32> {
            let mut v = vec![0];
            if l == 0 {
                v.push(-1);
            }
            if l == size - 1 {
                v.push(1);
            }
            v
        };
        let (ox, oy, oz) = (seam(lx, self.sx), seam(ly, self.sy), seam(lz, self.sz));

        // Current chunk first, then seam neighbours
        let mut affected = vec![(cx, cy, cz)];
        for dx in &ox {
            for dy in &oy {
                for dz in &oz {
                    let key = (cx + dx, cy + dy, cz + dz);
                    if !affected.contains(&key) {
                        affected.push(key);
                    }
                }
            }
        }
        affected
    }

    pub fn chunk_rev(&self, key: (i32, i32, i32)) -> u64 {
        self.rev.get(&key).copied().unwrap_or(0)
    }

    pub fn built_rev(&self, key: (i32, i32, i32)) -> u64 {
        self.built.get(&key).copied().unwrap_or(0)
    }

    pub fn mark_built(&mut self, key: (i32, i32, i32), rev: u64) {
        // Only update if this is a newer revision
        let e = self.built.entry(key).or_insert(0);
        if rev > *e {
            *e = rev;
        }
    }

    pub fn needs_rebuild(&self, key: (i32, i32, i32)) -> bool {
        self.chunk_rev(key) > self.built_rev(key)
    }

    /// Chunks changed since they were last marked built, sorted.
    pub fn dirty_chunks(&self) -> Vec<(i32, i32, i32)> {
        let mut out: Vec<_> = self
            .rev
            .keys()
            .copied()
            .filter(|k| self.needs_rebuild(*k))
            .collect();
        out.sort();
        out
    }
}

impl Grid for VoxelGrid {
    fn block(&self, at: Coord) -> Option<Block> {
        if !self.in_bounds(at) {
            return None;
        }
        let stored = self
            .inner
            .get(&self.chunk_key(at))
            .and_then(|m| m.get(&at).copied());
        Some(stored.unwrap_or(Block::AIR))
    }

    fn set_block(&mut self, at: Coord, block: Block, update: BlockUpdate) {
        if !self.in_bounds(at) {
            log::trace!("ignoring write outside bounds at {}", at);
            return;
        }
        let key = self.chunk_key(at);
        if block.is_air() {
            if let Some(m) = self.inner.get_mut(&key) {
                m.remove(&at);
                if m.is_empty() {
                    self.inner.remove(&key);
                }
            }
        } else {
            self.inner.entry(key).or_default().insert(at, block);
        }
        match update {
            BlockUpdate::Notify => {
                self.bump_region_around(at);
            }
            BlockUpdate::Quiet => {
                let stamp = self.bump();
                self.rev.insert(key, stamp);
            }
        }
    }

    fn light_level(&self, at: Coord) -> u8 {
        if !self.in_bounds(at) {
            return 0;
        }
        let sky = if self.sees_sky(at) { self.sky_light } else { 0 };
        let pinned = self.block_light.get(&at).copied().unwrap_or(0);
        // Emitters light their own cell fully and adjacent cells one level dimmer.
        let own = self.emission_at(at);
        let near = Dir::ALL
            .iter()
            .filter_map(|d| at.checked_offset(*d))
            .map(|n| self.emission_at(n).saturating_sub(1))
            .max()
            .unwrap_or(0);
        sky.max(pinned).max(own).max(near)
    }

    fn sees_sky(&self, at: Coord) -> bool {
        if !self.in_bounds(at) {
            return false;
        }
        ((at.y + 1)..self.max_y).all(|y| {
            self.block_type(Coord::new(at.x, y, at.z))
                .map(|ty| !ty.blocks_skylight)
                .unwrap_or(true)
        })
    }

    fn can_sustain_plant(&self, at: Coord, face: Dir) -> bool {
        face == Dir::Up
            && self
                .block_type(at)
                .map(|ty| ty.sustains_plants)
                .unwrap_or(false)
    }

    fn is_replaceable(&self, at: Coord) -> bool {
        self.block_type(at).map(|ty| ty.replaceable).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grove_blocks::config::{BlockDef, BlocksConfig};

    fn registry() -> Arc<BlockRegistry> {
        let blocks = vec![
            BlockDef {
                solid: Some(false),
                ..BlockDef::named("air")
            },
            BlockDef::named("stone"),
            BlockDef {
                sustains_plants: Some(true),
                ..BlockDef::named("grass")
            },
            BlockDef {
                emission: Some(12),
                ..BlockDef::named("lamp")
            },
            BlockDef {
                blocks_skylight: Some(false),
                ..BlockDef::named("glass")
            },
        ];
        Arc::new(BlockRegistry::from_config(BlocksConfig { blocks }).unwrap())
    }

    fn make_grid() -> VoxelGrid {
        VoxelGrid::with_chunk_size(registry(), 0, 64, 32)
    }

    #[test]
    fn unstored_cells_are_air_and_out_of_bounds_are_absent() {
        let grid = make_grid();
        assert_eq!(grid.block(Coord::new(3, 10, 3)), Some(Block::AIR));
        assert_eq!(grid.block(Coord::new(3, -1, 3)), None);
        assert_eq!(grid.block(Coord::new(3, 64, 3)), None);
        assert!(!grid.is_replaceable(Coord::new(0, -5, 0)));
    }

    #[test]
    fn writing_air_drops_storage() {
        let mut grid = make_grid();
        let at = Coord::new(1, 1, 1);
        grid.set_block(at, Block::of(1), BlockUpdate::Quiet);
        assert_eq!(grid.stats().stored_blocks, 1);
        grid.clear(at);
        assert_eq!(grid.stats().stored_blocks, 0);
        assert_eq!(grid.stats().chunk_entries, 0);
        assert_eq!(grid.block(at), Some(Block::AIR));
    }

    #[test]
    fn sky_view_ignores_transparent_blocks() {
        let mut grid = make_grid();
        let at = Coord::new(5, 10, 5);
        assert!(grid.sees_sky(at));
        grid.set_block(Coord::new(5, 20, 5), Block::of(4), BlockUpdate::Quiet);
        assert!(grid.sees_sky(at));
        grid.set_block(Coord::new(5, 30, 5), Block::of(1), BlockUpdate::Quiet);
        assert!(!grid.sees_sky(at));
        assert!(grid.sees_sky(Coord::new(5, 31, 5)));
    }

    #[test]
    fn light_combines_sky_pins_and_emitters() {
        let mut grid = make_grid();
        let at = Coord::new(0, 10, 0);
        grid.set_sky_light(4);
        assert_eq!(grid.light_level(at), 4);
        grid.set_block(Coord::new(0, 40, 0), Block::of(1), BlockUpdate::Quiet);
        assert_eq!(grid.light_level(at), 0);
        grid.set_block_light(at, 9);
        assert_eq!(grid.light_level(at), 9);
        grid.set_block(Coord::new(1, 10, 0), Block::of(3), BlockUpdate::Quiet);
        assert_eq!(grid.light_level(at), 11);
        grid.set_block_light(at, 0);
        assert_eq!(grid.stats().light_overrides, 0);
    }

    #[test]
    fn only_upward_face_of_sustaining_block_holds_plants() {
        let mut grid = make_grid();
        let soil = Coord::new(2, 5, 2);
        grid.set_block(soil, Block::of(2), BlockUpdate::Quiet);
        assert!(grid.can_sustain_plant(soil, Dir::Up));
        assert!(!grid.can_sustain_plant(soil, Dir::East));
        grid.set_block(soil, Block::of(1), BlockUpdate::Quiet);
        assert!(!grid.can_sustain_plant(soil, Dir::Up));
        grid.set_block(soil, Block::of(77), BlockUpdate::Quiet);
        assert!(!grid.can_sustain_plant(soil, Dir::Up));
    }

    #[test]
    fn notify_on_seam_marks_neighbours_quiet_does_not() {
        let mut grid = make_grid();
        let seam = Coord::new(31, 5, 10);
        let stamp = {
            grid.set_block(seam, Block::of(1), BlockUpdate::Notify);
            grid.chunk_rev((0, 0, 0))
        };
        assert_eq!(grid.chunk_rev((1, 0, 0)), stamp);

        let inner = Coord::new(64 + 31, 5, 10);
        grid.set_block(inner, Block::of(1), BlockUpdate::Quiet);
        assert!(grid.chunk_rev((2, 0, 0)) > stamp);
        assert_eq!(grid.chunk_rev((3, 0, 0)), 0);
    }

    #[test]
    fn mark_built_clears_dirty_state() {
        let mut grid = make_grid();
        grid.set_block(Coord::new(10, 10, 10), Block::of(1), BlockUpdate::Notify);
        assert_eq!(grid.dirty_chunks(), vec![(0, 0, 0)]);
        let rev = grid.chunk_rev((0, 0, 0));
        grid.mark_built((0, 0, 0), rev);
        assert!(grid.dirty_chunks().is_empty());
        grid.mark_built((0, 0, 0), rev - 1);
        assert_eq!(grid.built_rev((0, 0, 0)), rev);
    }

    #[test]
    fn corner_edit_touches_eight_chunks() {
        let grid = make_grid();
        let mut affected = grid.affected_chunks(Coord::new(0, 0, 0));
        affected.sort();
        assert_eq!(affected.len(), 8);
        assert_eq!(affected[0], (-1, -1, -1));
    }
}
