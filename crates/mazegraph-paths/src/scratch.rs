//! Reusable BFS state shared by the path generators.

use std::collections::VecDeque;

/// One record of the BFS parent tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TreeNode {
    pub(crate) vertex: u32,
    /// Index of the parent record in the same tree; `None` for the root.
    pub(crate) parent: Option<u32>,
}

/// Visited flags, parent tree and frontier queues.
///
/// Owned by the graph and reused by every path query so that repeated
/// queries do not allocate after warm-up. [`begin`](Self::begin) must be
/// called at the start of each query.
#[derive(Debug, Clone, Default)]
pub(crate) struct BfsScratch {
    /// One flag per dense adjacency slot.
    visited: Vec<bool>,
    /// All-false copy of `visited`, grown in lockstep.
    cleared: Vec<bool>,
    pub(crate) tree: Vec<TreeNode>,
    pub(crate) queue: VecDeque<u32>,
    /// Frontier entries paired with their BFS depth.
    pub(crate) depth_queue: VecDeque<(u32, u32)>,
}

impl BfsScratch {
    /// Drop all state, keeping allocations where possible.
    pub(crate) fn reset(&mut self, vertex_capacity: usize, tree_capacity: usize) {
        self.visited.clear();
        self.visited.reserve(vertex_capacity);
        self.cleared.clear();
        self.cleared.reserve(vertex_capacity);
        self.tree.clear();
        self.tree.reserve(tree_capacity);
        self.queue.clear();
        self.depth_queue.clear();
    }

    /// Track one more dense slot, initially unvisited.
    pub(crate) fn push_vertex(&mut self) {
        self.visited.push(false);
        self.cleared.push(false);
    }

    /// Start a new query: clear the visited flags, the tree and the queues.
    pub(crate) fn begin(&mut self) {
        self.visited.copy_from_slice(&self.cleared);
        self.tree.clear();
        self.queue.clear();
        self.depth_queue.clear();
    }

    #[inline]
    pub(crate) fn is_visited(&self, slot: usize) -> bool {
        self.visited[slot]
    }

    #[inline]
    pub(crate) fn visit(&mut self, slot: usize) {
        self.visited[slot] = true;
    }

    /// Append a tree record and return its index.
    #[inline]
    pub(crate) fn push_node(&mut self, vertex: u32, parent: Option<u32>) -> u32 {
        let index = self.tree.len() as u32;
        self.tree.push(TreeNode { vertex, parent });
        index
    }

    /// Index of the most recently appended tree record.
    #[inline]
    pub(crate) fn last_node(&self) -> Option<u32> {
        self.tree.len().checked_sub(1).map(|i| i as u32)
    }

    /// Vertex numbers from tree record `end` up to the root, inclusive.
    pub(crate) fn trace(&self, end: u32) -> impl Iterator<Item = u32> + '_ {
        std::iter::successors(self.tree.get(end as usize), move |node| {
            node.parent.and_then(|p| self.tree.get(p as usize))
        })
        .map(|node| node.vertex)
    }
}
