use std::collections::VecDeque;

use rand::{Rng, RngCore};

/// Random source threaded through growth decisions and generators.
pub trait GrowthRng {
    /// Uniform draw in `0..bound`. A zero bound yields 0 without drawing.
    fn roll(&mut self, bound: u32) -> u32;
}

/// Adapts any `rand` generator.
#[derive(Clone, Debug)]
pub struct RandSource<R>(pub R);

impl<R: RngCore> GrowthRng for RandSource<R> {
    #[inline]
    fn roll(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.0.gen_range(0..bound)
    }
}

/// Replays a fixed list of draws, then yields 0. Every requested bound is
/// recorded so callers can check the order in which draws were consumed.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    script: VecDeque<u32>,
    bounds: Vec<u32>,
}

impl ScriptedRng {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: draws.into_iter().collect(),
            bounds: Vec::new(),
        }
    }

    /// Bounds passed to `roll`, in call order.
    pub fn bounds(&self) -> &[u32] {
        &self.bounds
    }

    pub fn draws(&self) -> usize {
        self.bounds.len()
    }
}

impl GrowthRng for ScriptedRng {
    fn roll(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.bounds.push(bound);
        self.script.pop_front().map(|v| v % bound).unwrap_or(0)
    }
}
