//! **gridway-core** — Grid-based path search engine (core types).
//!
//! This crate provides the foundational types used across the *gridway*
//! workspace: geometry primitives, terrain classification, and the cell
//! grid that the search and generation crates operate on.

pub mod geom;
pub mod grid;
pub mod terrain;

pub use geom::{Point, Range};
pub use grid::{Grid, GridError};
pub use terrain::{ClassMap, Terrain};
