//! Dense adjacency table addressed through a sparse per-cell lookup.

use std::num::NonZeroU32;

use crate::neighbors::Neighbors;

#[derive(Debug, Clone, Copy)]
struct Entry {
    vertex: u32,
    neighbors: Neighbors,
}

/// Adjacency entries for the vertices that exist, plus a lookup from every
/// grid cell to its entry.
///
/// `slots[v]` holds `slot + 1` of the entry for vertex number `v`, and every
/// stored slot is a valid index into `entries`. Both vectors are only
/// touched through this type.
#[derive(Debug, Clone, Default)]
pub(crate) struct AdjacencyStore {
    entries: Vec<Entry>,
    slots: Vec<Option<NonZeroU32>>,
}

impl AdjacencyStore {
    /// Drop every vertex and size the lookup for `cells` grid cells.
    pub(crate) fn reset(&mut self, cells: usize, capacity: usize) {
        self.entries.clear();
        self.entries.reserve(capacity);
        self.slots.clear();
        self.slots.resize(cells, None);
    }

    /// Number of existing vertices.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dense slot of `vertex`, if it exists.
    #[inline]
    pub(crate) fn slot(&self, vertex: u32) -> Option<usize> {
        self.slots
            .get(vertex as usize)
            .copied()
            .flatten()
            .map(|s| s.get() as usize - 1)
    }

    /// Slot of `vertex`, appending an empty entry first if it has none.
    ///
    /// Returns the slot and whether it was just created. `vertex` must be
    /// below the cell count given to [`reset`](Self::reset).
    pub(crate) fn get_or_insert(&mut self, vertex: u32) -> (usize, bool) {
        if let Some(slot) = self.slot(vertex) {
            return (slot, false);
        }
        let slot = self.entries.len();
        self.entries.push(Entry {
            vertex,
            neighbors: Neighbors::new(),
        });
        self.slots[vertex as usize] = NonZeroU32::new(slot as u32 + 1);
        (slot, true)
    }

    #[inline]
    pub(crate) fn neighbors(&self, slot: usize) -> &Neighbors {
        &self.entries[slot].neighbors
    }

    #[inline]
    pub(crate) fn neighbors_mut(&mut self, slot: usize) -> &mut Neighbors {
        &mut self.entries[slot].neighbors
    }

    /// Vertex number stored at `slot`.
    #[inline]
    pub(crate) fn vertex(&self, slot: usize) -> u32 {
        self.entries[slot].vertex
    }

    /// Vertex numbers in materialisation order.
    pub(crate) fn vertices(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|e| e.vertex)
    }

    /// Sum of all neighbor counts.
    pub(crate) fn degree_sum(&self) -> usize {
        self.entries.iter().map(|e| e.neighbors.len()).sum()
    }
}
