use grove_blocks::{Block, BlockId, BlockState};
use grove_geom::{Coord, Dir};

pub const MAX_LIGHT: u8 = 15;

/// How a write propagates to the cells around it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockUpdate {
    /// Neighbours are told the cell changed.
    Notify,
    /// Direct write; only the cell itself is marked changed.
    Quiet,
}

/// Coordinate-addressed view of the world that growth logic reads and mutates.
///
/// Cells outside the loaded region are absent (`None`). Absent cells never
/// sustain plants and are never replaceable.
pub trait Grid {
    fn block(&self, at: Coord) -> Option<Block>;

    fn set_block(&mut self, at: Coord, block: Block, update: BlockUpdate);

    /// Combined sky and block light at `at`, in `0..=MAX_LIGHT`.
    fn light_level(&self, at: Coord) -> u8;

    /// True when no skylight-blocking cell sits above `at`.
    fn sees_sky(&self, at: Coord) -> bool;

    /// Whether the block at `at` can hold a plant on its `face` side.
    fn can_sustain_plant(&self, at: Coord, face: Dir) -> bool;

    /// Whether a structure may overwrite the cell at `at`.
    fn is_replaceable(&self, at: Coord) -> bool;

    #[inline]
    fn block_id(&self, at: Coord) -> Option<BlockId> {
        self.block(at).map(|b| b.id)
    }

    #[inline]
    fn block_state(&self, at: Coord) -> Option<BlockState> {
        self.block(at).map(|b| b.state)
    }

    fn clear(&mut self, at: Coord) {
        self.set_block(at, Block::AIR, BlockUpdate::Notify);
    }
}
