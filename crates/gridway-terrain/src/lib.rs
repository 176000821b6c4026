//! Procedural terrain generation for gridway.
//!
//! Two interchangeable [`MapBuilder`]s produce the terrain-class matrix the
//! grid is built from:
//!
//! - [`RandomMapBuilder`] — independent uniform draws, a binary
//!   open/blocked map.
//! - [`DiamondSquareBuilder`] — fractal midpoint displacement with
//!   normalization and nine-class thresholding.
//!
//! Both own their random generator, so a given seed reproduces a map
//! exactly.

pub mod diamond_square;
pub mod random;

pub use diamond_square::DiamondSquareBuilder;
pub use random::RandomMapBuilder;

use gridway_core::ClassMap;

/// A producer of terrain-class maps.
///
/// Dimensions are fixed by constructor parameters; each call draws from the
/// builder's own RNG state, so consecutive calls yield different (but
/// seed-reproducible) maps.
pub trait MapBuilder {
    /// Generate a fresh terrain-class map.
    fn build(&mut self) -> ClassMap;
}
