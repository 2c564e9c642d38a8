//! The [`GridSize`] type — tile-map dimensions and the mapping between
//! tiles and linear vertex numbers.
//!
//! A vertex number is `y * width + x`. It spans every cell of the grid, not
//! only walkable ones.

use std::fmt;

use crate::geom::Tile;

// ---------------------------------------------------------------------------
// GridSize
// ---------------------------------------------------------------------------

/// Width and height of a tile map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    /// Create a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the grid has no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `t` lies inside `[0, width) × [0, height)`.
    #[inline]
    pub const fn contains(self, t: Tile) -> bool {
        t.x < self.width && t.y < self.height
    }

    /// Linear vertex number of `t`. No bounds check.
    #[inline]
    pub const fn vertex_number(self, t: Tile) -> u32 {
        t.y * self.width + t.x
    }

    /// Tile addressed by vertex number `n`. Requires `width > 0`.
    #[inline]
    pub const fn tile(self, n: u32) -> Tile {
        Tile::new(n % self.width, n / self.width)
    }

    /// Row-major iterator over every tile in the grid.
    #[inline]
    pub fn iter(self) -> GridIter {
        GridIter {
            size: self,
            cur: Tile::new(0, 0),
        }
    }
}

impl IntoIterator for GridSize {
    type Item = Tile;
    type IntoIter = GridIter;
    #[inline]
    fn into_iter(self) -> GridIter {
        self.iter()
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the tiles of a [`GridSize`].
#[derive(Clone, Debug)]
pub struct GridIter {
    size: GridSize,
    cur: Tile,
}

impl Iterator for GridIter {
    type Item = Tile;

    #[inline]
    fn next(&mut self) -> Option<Tile> {
        if self.size.is_empty() || self.cur.y >= self.size.height {
            return None;
        }
        let t = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.size.width {
            self.cur.x = 0;
            self.cur.y += 1;
        }
        Some(t)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.size.is_empty() || self.cur.y >= self.size.height {
            return (0, Some(0));
        }
        let w = self.size.width as usize;
        let remaining_in_row = (self.size.width - self.cur.x) as usize;
        let remaining_rows = (self.size.height - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for GridIter {}
