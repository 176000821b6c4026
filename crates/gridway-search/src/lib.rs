//! Path search for gridway grids.
//!
//! The centerpiece is [`Pathfinder`], an A* search with an octile cost
//! model (orthogonal step 10, diagonal step 14). Its open set is a
//! [`MinHeap`] — a fixed-capacity indexed binary heap with O(1) membership
//! tests and decrease-key repositioning — and its per-search scratch state
//! lives in a generation-stamped arena owned by the pathfinder, so repeated
//! queries allocate nothing and never mutate the grid being searched.
//!
//! Any map type can be searched by implementing [`SearchGraph`];
//! an implementation for [`gridway_core::Grid`] is provided.

mod astar;
mod distance;
mod heap;
mod traits;

pub use astar::Pathfinder;
pub use distance::{CARDINAL_COST, DIAGONAL_COST, octile, step_cost};
pub use heap::{HeapError, MinHeap, Priority};
pub use traits::SearchGraph;
