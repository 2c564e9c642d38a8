/// Dimensions and initial reservations used to (re)initialise a
/// [`MazeGraph`](crate::MazeGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GraphConfig {
    /// Tile-map width.
    pub width: u32,
    /// Tile-map height.
    pub height: u32,
    /// Initial capacity of the dense adjacency table (and visited flags).
    pub vertex_capacity: usize,
    /// Initial capacity of the BFS parent tree.
    pub tree_capacity: usize,
}

impl GraphConfig {
    /// Config for a `width × height` map with the default reservations.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            vertex_capacity: 64,
            tree_capacity: 256,
        }
    }
}
