use std::fmt;

use mazegraph_core::{GridSize, Tile};

/// Errors reported when a graph query breaks one of its preconditions.
///
/// These indicate caller bugs (a tile outside the map, a wall tile passed
/// as a path endpoint) rather than runtime conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The tile lies outside the grid the graph was initialised with.
    OutOfBounds { tile: Tile, size: GridSize },
    /// The tile is inside the grid but never received an edge.
    MissingVertex(Tile),
    /// The operation needs at least one vertex.
    EmptyGraph,
    /// A path must contain at least its source tile.
    EmptyPath,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { tile, size } => {
                write!(f, "tile {tile} is outside the {size} grid")
            }
            Self::MissingVertex(tile) => write!(f, "tile {tile} is not a vertex of the graph"),
            Self::EmptyGraph => write!(f, "graph has no vertices"),
            Self::EmptyPath => write!(f, "path must contain at least one tile"),
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = GraphError::OutOfBounds {
            tile: Tile::new(5, 1),
            size: GridSize::new(4, 4),
        };
        assert_eq!(e.to_string(), "tile (5, 1) is outside the 4x4 grid");
        assert_eq!(
            GraphError::MissingVertex(Tile::new(0, 2)).to_string(),
            "tile (0, 2) is not a vertex of the graph"
        );
        assert_eq!(GraphError::EmptyGraph.to_string(), "graph has no vertices");
    }
}
