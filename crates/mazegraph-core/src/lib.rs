//! **mazegraph-core** — geometry and grid indexing for tile-based games.
//!
//! This crate provides the value types shared across the *mazegraph*
//! crates: unsigned tile coordinates, signed direction vectors, and the
//! grid dimensions that map tiles to linear vertex numbers and back.

pub mod geom;
pub mod grid;

pub use geom::{Point, Tile};
pub use grid::{GridIter, GridSize};
