//! Step-by-step consumption of a generated path.

use mazegraph_core::Tile;

use crate::error::GraphError;

/// A path being walked by an agent.
///
/// Wraps a non-empty tile sequence whose first element is the tile the agent
/// starts on, plus a cursor at the next tile to step onto. A freshly
/// installed path has its cursor at index 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    tiles: Vec<Tile>,
    cursor: usize,
}

impl Path {
    /// Wrap a generated tile sequence.
    pub fn new(tiles: Vec<Tile>) -> Result<Self, GraphError> {
        if tiles.is_empty() {
            return Err(GraphError::EmptyPath);
        }
        Ok(Self { tiles, cursor: 1 })
    }

    /// A path that stays on `tile`.
    pub fn at(tile: Tile) -> Self {
        Self {
            tiles: vec![tile],
            cursor: 1,
        }
    }

    /// Replace the path with `tiles` and rewind the cursor.
    ///
    /// On error the current path is left untouched.
    pub fn set(&mut self, tiles: Vec<Tile>) -> Result<(), GraphError> {
        if tiles.is_empty() {
            return Err(GraphError::EmptyPath);
        }
        self.tiles = tiles;
        self.cursor = 1;
        Ok(())
    }

    /// Step onto the next tile, or `None` once the path is fully traversed.
    pub fn next_tile(&mut self) -> Option<Tile> {
        let t = self.tiles.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(t)
    }

    /// Whether every tile has been stepped onto.
    #[inline]
    pub fn is_fully_traversed(&self) -> bool {
        self.cursor >= self.tiles.len()
    }

    /// Whether the path has no edges (it only holds its source tile).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.len() == 1
    }

    /// Number of edges, one less than the number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len() - 1
    }

    /// Tile at absolute index `n` (0 is the source), regardless of the
    /// cursor.
    #[inline]
    pub fn peek_ahead(&self, n: usize) -> Option<Tile> {
        self.tiles.get(n).copied()
    }

    /// Number of steps taken so far.
    #[inline]
    pub fn edges_traversed(&self) -> usize {
        self.cursor - 1
    }

    #[inline]
    pub fn source(&self) -> Tile {
        self.tiles[0]
    }

    #[inline]
    pub fn last_tile(&self) -> Tile {
        self.tiles[self.tiles.len() - 1]
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tiles not yet stepped onto.
    #[inline]
    pub fn remaining(&self) -> &[Tile] {
        &self.tiles[self.cursor.min(self.tiles.len())..]
    }
}

impl TryFrom<Vec<Tile>> for Path {
    type Error = GraphError;

    fn try_from(tiles: Vec<Tile>) -> Result<Self, GraphError> {
        Self::new(tiles)
    }
}
