//! Uniform random binary maps.

use gridway_core::{ClassMap, Terrain};
use rand::{Rng, RngExt};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::MapBuilder;

/// Generates maps where each cell is an independent coin flip between open
/// grassland and blocking deep water. No class variety beyond the two.
pub struct RandomMapBuilder<R: Rng = ChaCha8Rng> {
    width: i32,
    height: i32,
    rng: R,
}

impl RandomMapBuilder<ChaCha8Rng> {
    /// Create a builder with a deterministic generator for `seed`.
    pub fn new(width: i32, height: i32, seed: u64) -> Self {
        Self::with_rng(width, height, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomMapBuilder<R> {
    /// Create a builder drawing from the given generator.
    pub fn with_rng(width: i32, height: i32, rng: R) -> Self {
        Self { width, height, rng }
    }
}

impl<R: Rng> MapBuilder for RandomMapBuilder<R> {
    fn build(&mut self) -> ClassMap {
        let mut map = ClassMap::new(self.width, self.height);
        for p in map.bounds().iter() {
            let t = if self.rng.random_range(0..2u32) == 0 {
                Terrain::DeepWater
            } else {
                Terrain::Grassland
            };
            map.set(p, t);
        }
        log::info!("random map generated: {}x{}", map.width(), map.height());
        map
    }
}
