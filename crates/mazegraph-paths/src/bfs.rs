//! Breadth-first path generators.
//!
//! Every generator resets the scratch state, grows a BFS parent tree from
//! one root and then walks parent links back from a chosen end record. The
//! returned path always starts at the `source` argument and is never empty.

use mazegraph_core::{Point, Tile};
use rand::Rng;

use crate::align::most_aligned;
use crate::error::GraphError;
use crate::graph::MazeGraph;

impl MazeGraph {
    /// Shortest path from `source` to `target`, both included.
    ///
    /// The search is rooted at `target` so that parent links already lead
    /// from `source` towards it. If `target` cannot be reached the path is
    /// just `[source]`.
    pub fn shortest_path(&mut self, source: Tile, target: Tile) -> Result<Vec<Tile>, GraphError> {
        if source == target {
            return Ok(vec![source]);
        }
        self.slot_of(source)?;
        self.slot_of(target)?;

        let src = self.size.vertex_number(source);
        let tgt = self.size.vertex_number(target);
        match self.search_toward(tgt, src, None) {
            Some(found) => Ok(self.collect_trace(found)),
            None => {
                log::debug!("no path from {source} to {target}");
                Ok(vec![source])
            }
        }
    }

    /// Shortest path from `source` to a random vertex other than `source`.
    pub fn random_path<R: Rng + ?Sized>(
        &mut self,
        source: Tile,
        rng: &mut R,
    ) -> Result<Vec<Tile>, GraphError> {
        // An existing source has an edge, so another vertex exists too.
        self.slot_of(source)?;
        let mut target = source;
        while target == source {
            target = self.random_tile(rng)?;
        }
        self.shortest_path(source, target)
    }

    /// Path of `length` edges starting at `source`, ending at a vertex whose
    /// BFS distance from `source` is `length`.
    ///
    /// If no vertex is that far away the path ends at the last vertex of the
    /// deepest BFS layer instead.
    pub fn fixed_length_path(&mut self, source: Tile, length: u32) -> Result<Vec<Tile>, GraphError> {
        if length == 0 {
            return Ok(vec![source]);
        }
        let src_slot = self.slot_of(source)?;
        let src = self.size.vertex_number(source);

        let Self { store, scratch, .. } = self;
        scratch.begin();
        scratch.visit(src_slot);
        scratch.push_node(src, None);
        scratch.depth_queue.push_back((src, 0));

        let mut parent: u32 = 0;
        while let Some((current, depth)) = scratch.depth_queue.pop_front() {
            // The first record at the requested depth ends the search; the
            // whole previous layer has been expanded by then.
            if depth == length {
                break;
            }
            if let Some(slot) = store.slot(current) {
                for &n in store.neighbors(slot) {
                    let Some(ns) = store.slot(n) else {
                        continue;
                    };
                    if scratch.is_visited(ns) {
                        continue;
                    }
                    scratch.visit(ns);
                    scratch.push_node(n, Some(parent));
                    scratch.depth_queue.push_back((n, depth + 1));
                }
            }
            parent += 1;
        }

        Ok(self.collect_trace_reversed())
    }

    /// Walk from `source` as far as possible along `direction`.
    ///
    /// Each step moves to the neighbor chosen by [`most_aligned`], so the
    /// walk stops as soon as every neighbor would be sideways or backward,
    /// when a vertex would be revisited, or after `max_length` steps.
    /// `None` means no step limit. A zero `direction` yields `[source]`.
    pub fn path_along_direction(
        &mut self,
        source: Tile,
        direction: Point,
        max_length: Option<u32>,
    ) -> Result<Vec<Tile>, GraphError> {
        if direction.is_zero() {
            return Ok(vec![source]);
        }
        let src_slot = self.slot_of(source)?;
        let src = self.size.vertex_number(source);

        let Self {
            size,
            store,
            scratch,
        } = self;
        let size = *size;
        scratch.begin();
        scratch.visit(src_slot);
        scratch.push_node(src, None);
        scratch.queue.push_back(src);

        let mut steps: u32 = 0;
        while let Some(current) = scratch.queue.pop_front() {
            if max_length == Some(steps) {
                break;
            }
            let Some(slot) = store.slot(current) else {
                break;
            };
            let neighbors = store.neighbors(slot);
            let pivot = size.tile(current);
            let candidates = neighbors.iter().map(|&n| size.tile(n));
            let Some(i) = most_aligned(pivot, candidates, direction) else {
                break;
            };
            let next = neighbors.as_slice()[i];
            let Some(ns) = store.slot(next) else {
                break;
            };
            if scratch.is_visited(ns) {
                break;
            }
            scratch.visit(ns);
            scratch.push_node(next, Some(steps));
            scratch.queue.push_back(next);
            steps += 1;
        }

        Ok(self.collect_trace_reversed())
    }

    /// Shortest path from `source` to `target` that does not pass through
    /// `avoid`.
    ///
    /// Returns `[source]` if any two of the three tiles coincide, or if
    /// every route to `target` goes through `avoid`. `avoid` itself need
    /// not be a vertex.
    pub fn path_avoiding(
        &mut self,
        source: Tile,
        target: Tile,
        avoid: Tile,
    ) -> Result<Vec<Tile>, GraphError> {
        if source == avoid || source == target || avoid == target {
            return Ok(vec![source]);
        }
        self.slot_of(source)?;
        self.slot_of(target)?;

        let src = self.size.vertex_number(source);
        let tgt = self.size.vertex_number(target);
        // An out-of-range tile is never reached, so it has nothing to block.
        let blocked = self
            .size
            .contains(avoid)
            .then(|| self.size.vertex_number(avoid));
        match self.search_toward(tgt, src, blocked) {
            Some(found) => Ok(self.collect_trace(found)),
            None => {
                log::debug!("no path from {source} to {target} avoiding {avoid}");
                Ok(vec![source])
            }
        }
    }

    // -----------------------------------------------------------------------
    // Shared machinery
    // -----------------------------------------------------------------------

    /// BFS from `root` until `goal` is dequeued, never expanding `avoid`.
    ///
    /// Returns the tree index of `goal`, or `None` if the queue runs dry.
    /// Records are appended in queue order, so the n-th dequeued vertex is
    /// tree record n.
    fn search_toward(&mut self, root: u32, goal: u32, avoid: Option<u32>) -> Option<u32> {
        let Self { store, scratch, .. } = self;
        scratch.begin();
        let root_slot = store.slot(root)?;
        scratch.visit(root_slot);
        scratch.push_node(root, None);
        scratch.queue.push_back(root);

        let mut parent: u32 = 0;
        while let Some(current) = scratch.queue.pop_front() {
            if current == goal {
                return Some(parent);
            }
            if Some(current) != avoid {
                if let Some(slot) = store.slot(current) {
                    for &n in store.neighbors(slot) {
                        let Some(ns) = store.slot(n) else {
                            continue;
                        };
                        if scratch.is_visited(ns) {
                            continue;
                        }
                        scratch.visit(ns);
                        scratch.push_node(n, Some(parent));
                        scratch.queue.push_back(n);
                    }
                }
            }
            parent += 1;
        }
        None
    }

    /// Tiles from tree record `end` up to the root.
    fn collect_trace(&self, end: u32) -> Vec<Tile> {
        let size = self.size;
        self.scratch.trace(end).map(|v| size.tile(v)).collect()
    }

    /// Tiles from the root down to the most recently appended record.
    fn collect_trace_reversed(&self) -> Vec<Tile> {
        let mut path = match self.scratch.last_node() {
            Some(end) => self.collect_trace(end),
            None => Vec::new(),
        };
        path.reverse();
        path
    }
}
