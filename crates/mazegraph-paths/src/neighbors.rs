/// Maximum number of neighbors of a tile: one per cardinal direction.
pub const MAX_NEIGHBORS: usize = 4;

/// Fixed-capacity set of neighbor vertex numbers for one vertex.
///
/// Holds at most [`MAX_NEIGHBORS`] entries, each at most once, in insertion
/// order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbors {
    vertices: [u32; MAX_NEIGHBORS],
    len: u8,
}

impl Neighbors {
    /// An empty neighbor set.
    pub const fn new() -> Self {
        Self {
            vertices: [0; MAX_NEIGHBORS],
            len: 0,
        }
    }

    /// Append `vertex` unless it is already present or the set is full.
    ///
    /// Returns whether the vertex was added.
    pub fn insert(&mut self, vertex: u32) -> bool {
        if self.is_full() || self.contains(vertex) {
            return false;
        }
        self.vertices[self.len as usize] = vertex;
        self.len += 1;
        true
    }

    /// Whether `vertex` is one of the neighbors.
    #[inline]
    pub fn contains(&self, vertex: u32) -> bool {
        self.as_slice().contains(&vertex)
    }

    /// Number of neighbors.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == MAX_NEIGHBORS
    }

    /// The neighbors in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.vertices[..self.len()]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a Neighbors {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
