//! Tile connectivity graph and path generation for tile-based games.
//!
//! [`MazeGraph`] stores an undirected, unweighted graph whose vertices are
//! the walkable tiles of a rectangular tile map, with at most one edge per
//! cardinal direction. On top of it five breadth-first generators produce
//! tile paths:
//!
//! - **Shortest path** between two tiles ([`MazeGraph::shortest_path`])
//! - **Random path** to any other vertex ([`MazeGraph::random_path`])
//! - **Fixed-length path** ([`MazeGraph::fixed_length_path`])
//! - **Directional walk** ([`MazeGraph::path_along_direction`])
//! - **Shortest path avoiding a tile** ([`MazeGraph::path_avoiding`])
//!
//! The graph owns and reuses its search buffers, so repeated queries incur
//! no allocations beyond the returned path after warm-up. Returned paths
//! can be walked step by step through [`Path`].
//!
//! # Building a graph
//!
//! ```
//! use mazegraph_core::Tile;
//! use mazegraph_paths::MazeGraph;
//!
//! let mut graph = MazeGraph::new(3, 3);
//! graph.add_walkable_edges(|t| t != Tile::new(1, 1));
//! assert_eq!(graph.vertex_count(), 8);
//!
//! let path = graph.shortest_path(Tile::new(0, 1), Tile::new(2, 1)).unwrap();
//! assert_eq!(path.len(), 5);
//! ```

mod adjacency;
mod align;
mod bfs;
mod config;
mod error;
mod graph;
mod neighbors;
mod path;
mod scratch;

pub use align::most_aligned;
pub use config::GraphConfig;
pub use error::GraphError;
pub use graph::MazeGraph;
pub use neighbors::{MAX_NEIGHBORS, Neighbors};
pub use path::Path;
