use mazegraph_core::{GridSize, Point, Tile};
use rand::Rng;

use crate::adjacency::AdjacencyStore;
use crate::config::GraphConfig;
use crate::error::GraphError;
use crate::neighbors::Neighbors;
use crate::scratch::BfsScratch;

// ---------------------------------------------------------------------------
// MazeGraph
// ---------------------------------------------------------------------------

/// Undirected, unweighted connectivity graph over the walkable tiles of a
/// tile map.
///
/// A tile becomes a vertex the first time an edge touching it is added.
/// Each vertex has at most four neighbors. The graph also owns the BFS
/// scratch buffers used by the path generators, so path queries take
/// `&mut self` even though they never change the topology. Give each thread
/// its own clone if queries must run concurrently.
#[derive(Debug, Clone, Default)]
pub struct MazeGraph {
    pub(crate) size: GridSize,
    pub(crate) store: AdjacencyStore,
    pub(crate) scratch: BfsScratch,
}

impl MazeGraph {
    /// Create an edgeless graph for a `width × height` tile map.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(&GraphConfig::new(width, height))
    }

    /// Create an edgeless graph from a [`GraphConfig`].
    pub fn with_config(config: &GraphConfig) -> Self {
        let mut graph = Self::default();
        graph.init_with(config);
        graph
    }

    /// Drop every vertex and edge and resize the graph to `width × height`.
    ///
    /// May be called any number of times to rebuild the graph.
    pub fn init(&mut self, width: u32, height: u32) {
        self.init_with(&GraphConfig::new(width, height));
    }

    /// Like [`init`](Self::init), using the reservations of `config`.
    pub fn init_with(&mut self, config: &GraphConfig) {
        self.size = GridSize::new(config.width, config.height);
        self.store.reset(self.size.len(), config.vertex_capacity);
        self.scratch.reset(config.vertex_capacity, config.tree_capacity);
        log::debug!(
            "maze graph initialised: {} grid, {} cells",
            self.size,
            self.size.len()
        );
    }

    /// Dimensions of the tile map.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Number of vertices, i.e. tiles with at least one edge.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.store.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.store.degree_sum() / 2
    }

    /// Whether `tile` is a vertex.
    pub fn contains(&self, tile: Tile) -> bool {
        self.size.contains(tile) && self.store.slot(self.size.vertex_number(tile)).is_some()
    }

    /// Every vertex, in the order the vertices were first touched by an edge.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        let size = self.size;
        self.store.vertices().map(move |v| size.tile(v))
    }

    /// Connect `v` and `w` in both directions.
    ///
    /// Out-of-range endpoints and self-loops are ignored, as is an edge that
    /// already exists. The caller decides which tiles are walkable and
    /// adjacent; only the bounds are checked here.
    pub fn add_edge(&mut self, v: Tile, w: Tile) {
        if !self.size.contains(v) || !self.size.contains(w) {
            log::trace!("dropping edge {v} - {w} outside the {} grid", self.size);
            return;
        }
        if v == w {
            log::trace!("ignoring self-loop on {v}");
            return;
        }

        let vn = self.size.vertex_number(v);
        let wn = self.size.vertex_number(w);

        // Both directions are recorded or neither.
        let no_room = |slot: Option<usize>, other: u32| {
            slot.is_some_and(|s| {
                let n = self.store.neighbors(s);
                n.is_full() && !n.contains(other)
            })
        };
        if no_room(self.store.slot(vn), wn) || no_room(self.store.slot(wn), vn) {
            log::warn!("dropping edge {v} - {w}: a tile already has four neighbors");
            return;
        }

        let v_slot = self.materialize(vn);
        let w_slot = self.materialize(wn);
        self.store.neighbors_mut(v_slot).insert(wn);
        self.store.neighbors_mut(w_slot).insert(vn);
    }

    /// Add an edge between every pair of 4-adjacent tiles that are both
    /// walkable.
    ///
    /// Tiles are scanned row by row; each one is connected to its right and
    /// then its lower neighbor. Walkable tiles with no walkable neighbor do
    /// not become vertices.
    pub fn add_walkable_edges(&mut self, is_walkable: impl Fn(Tile) -> bool) {
        const FORWARD: [Point; 2] = [Point::new(1, 0), Point::new(0, 1)];
        let size = self.size;
        for t in size {
            if !is_walkable(t) {
                continue;
            }
            for n in FORWARD.into_iter().filter_map(|d| t.offset(d)) {
                if size.contains(n) && is_walkable(n) {
                    self.add_edge(t, n);
                }
            }
        }
    }

    /// Neighbor vertex numbers of `tile`, without allocating.
    ///
    /// Use [`GridSize::tile`] on [`size`](Self::size) to turn them back into
    /// tiles.
    pub fn neighbors(&self, tile: Tile) -> Result<Neighbors, GraphError> {
        let slot = self.slot_of(tile)?;
        Ok(*self.store.neighbors(slot))
    }

    /// Neighbors of `tile`, in the order their edges were added.
    pub fn adjacent(&self, tile: Tile) -> Result<Vec<Tile>, GraphError> {
        let slot = self.slot_of(tile)?;
        Ok(self
            .store
            .neighbors(slot)
            .iter()
            .map(|&n| self.size.tile(n))
            .collect())
    }

    /// Neighbors of `tile` other than `exclude`.
    pub fn adjacent_except(&self, tile: Tile, exclude: Tile) -> Result<Vec<Tile>, GraphError> {
        let mut tiles = self.adjacent(tile)?;
        tiles.retain(|&t| t != exclude);
        Ok(tiles)
    }

    /// Whether an edge connects `v` and `w`. Both must be vertices.
    pub fn is_adjacent(&self, v: Tile, w: Tile) -> Result<bool, GraphError> {
        let slot = self.slot_of(v)?;
        self.slot_of(w)?;
        Ok(self
            .store
            .neighbors(slot)
            .contains(self.size.vertex_number(w)))
    }

    /// A vertex chosen uniformly at random.
    pub fn random_tile<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Tile, GraphError> {
        if self.store.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        let slot = rng.random_range(0..self.store.len());
        Ok(self.size.tile(self.store.vertex(slot)))
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Dense slot of `tile`, checking bounds and existence.
    pub(crate) fn slot_of(&self, tile: Tile) -> Result<usize, GraphError> {
        if !self.size.contains(tile) {
            return Err(GraphError::OutOfBounds {
                tile,
                size: self.size,
            });
        }
        self.store
            .slot(self.size.vertex_number(tile))
            .ok_or(GraphError::MissingVertex(tile))
    }

    fn materialize(&mut self, vertex: u32) -> usize {
        let (slot, created) = self.store.get_or_insert(vertex);
        if created {
            self.scratch.push_vertex();
        }
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    fn t(x: u32, y: u32) -> Tile {
        Tile::new(x, y)
    }

    fn open_grid(w: u32, h: u32) -> MazeGraph {
        let mut g = MazeGraph::new(w, h);
        g.add_walkable_edges(|_| true);
        g
    }

    #[test]
    fn add_edge_is_undirected() {
        let mut g = MazeGraph::new(4, 4);
        g.add_edge(t(1, 1), t(2, 1));
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.is_adjacent(t(1, 1), t(2, 1)), Ok(true));
        assert_eq!(g.is_adjacent(t(2, 1), t(1, 1)), Ok(true));
    }

    #[test]
    fn duplicate_edge_is_ignored() {
        let mut g = MazeGraph::new(4, 4);
        g.add_edge(t(0, 0), t(1, 0));
        g.add_edge(t(1, 0), t(0, 0));
        g.add_edge(t(0, 0), t(1, 0));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.adjacent(t(0, 0)).unwrap(), vec![t(1, 0)]);
        assert_eq!(g.adjacent(t(1, 0)).unwrap(), vec![t(0, 0)]);
    }

    #[test]
    fn out_of_range_edge_is_dropped() {
        let mut g = MazeGraph::new(3, 3);
        g.add_edge(t(2, 2), t(3, 2));
        g.add_edge(t(0, 5), t(0, 0));
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.contains(t(2, 2)));
    }

    #[test]
    fn self_loop_is_ignored() {
        let mut g = MazeGraph::new(3, 3);
        g.add_edge(t(1, 1), t(1, 1));
        assert_eq!(g.vertex_count(), 0);
    }

    #[test]
    fn fifth_neighbor_is_dropped_on_both_sides() {
        let mut g = MazeGraph::new(5, 5);
        let hub = t(2, 2);
        for n in [t(2, 1), t(3, 2), t(2, 3), t(1, 2)] {
            g.add_edge(hub, n);
        }
        // Not grid-adjacent, but only bounds are checked.
        g.add_edge(hub, t(0, 0));
        assert_eq!(g.adjacent(hub).unwrap().len(), 4);
        assert_eq!(g.edge_count(), 4);
        assert!(!g.contains(t(0, 0)));
        assert_eq!(g.vertex_count(), 5);
    }

    #[test]
    fn three_by_three_counts() {
        let g = open_grid(3, 3);
        assert_eq!(g.vertex_count(), 9);
        assert_eq!(g.edge_count(), 12);
    }

    #[test]
    fn adjacency_matches_is_adjacent() {
        let g = open_grid(4, 3);
        for v in g.tiles().collect::<Vec<_>>() {
            let adj = g.adjacent(v).unwrap();
            let expected: Vec<Tile> = g
                .tiles()
                .filter(|&w| g.is_adjacent(v, w).unwrap())
                .collect();
            assert_eq!(adj.len(), expected.len());
            for w in &expected {
                assert!(adj.contains(w));
            }
        }
    }

    #[test]
    fn neighbors_are_vertex_numbers() {
        let mut g = MazeGraph::new(3, 3);
        g.add_edge(t(0, 0), t(1, 0));
        g.add_edge(t(0, 0), t(0, 1));
        let n = g.neighbors(t(0, 0)).unwrap();
        assert_eq!(n.as_slice(), &[1, 3]);
        let size = g.size();
        let tiles: Vec<Tile> = n.iter().map(|&v| size.tile(v)).collect();
        assert_eq!(tiles, g.adjacent(t(0, 0)).unwrap());
    }

    #[test]
    fn adjacent_keeps_insertion_order() {
        let mut g = MazeGraph::new(3, 3);
        g.add_edge(t(1, 1), t(1, 2));
        g.add_edge(t(1, 1), t(0, 1));
        g.add_edge(t(1, 1), t(1, 0));
        assert_eq!(g.adjacent(t(1, 1)).unwrap(), vec![t(1, 2), t(0, 1), t(1, 0)]);
        assert_eq!(
            g.adjacent_except(t(1, 1), t(0, 1)).unwrap(),
            vec![t(1, 2), t(1, 0)]
        );
        // Excluding a non-neighbor changes nothing.
        assert_eq!(g.adjacent_except(t(1, 1), t(2, 2)).unwrap().len(), 3);
    }

    #[test]
    fn queries_check_preconditions() {
        let mut g = MazeGraph::new(3, 3);
        g.add_edge(t(0, 0), t(1, 0));
        assert_eq!(
            g.adjacent(t(3, 0)),
            Err(GraphError::OutOfBounds {
                tile: t(3, 0),
                size: GridSize::new(3, 3)
            })
        );
        assert_eq!(g.adjacent(t(2, 2)), Err(GraphError::MissingVertex(t(2, 2))));
        assert_eq!(
            g.is_adjacent(t(0, 0), t(2, 2)),
            Err(GraphError::MissingVertex(t(2, 2)))
        );
    }

    #[test]
    fn init_rebuilds_from_scratch() {
        let mut g = open_grid(3, 3);
        g.init(2, 1);
        assert_eq!(g.size(), GridSize::new(2, 1));
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
        g.add_edge(t(0, 0), t(1, 0));
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.tiles().collect::<Vec<_>>(), vec![t(0, 0), t(1, 0)]);
    }

    #[test]
    fn walkable_edges_skip_walls() {
        // .#.
        // ...
        let walls = [t(1, 0)];
        let mut g = MazeGraph::new(3, 2);
        g.add_walkable_edges(|p| !walls.contains(&p));
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 4);
        assert!(!g.contains(t(1, 0)));
        assert_eq!(g.is_adjacent(t(0, 0), t(0, 1)), Ok(true));
    }

    #[test]
    fn isolated_walkable_tile_is_not_a_vertex() {
        let mut g = MazeGraph::new(3, 3);
        g.add_walkable_edges(|p| p == t(1, 1));
        assert_eq!(g.vertex_count(), 0);
    }

    #[test]
    fn random_tile_is_a_vertex() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut g = MazeGraph::new(5, 5);
        g.add_edge(t(1, 1), t(1, 2));
        g.add_edge(t(4, 4), t(3, 4));
        for _ in 0..50 {
            let r = g.random_tile(&mut rng).unwrap();
            assert!(g.contains(r));
        }
    }

    #[test]
    fn random_tile_on_empty_graph() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = MazeGraph::new(5, 5);
        assert_eq!(g.random_tile(&mut rng), Err(GraphError::EmptyGraph));
    }

    #[test]
    fn random_tile_accepts_dyn_rng() {
        let mut seeded = StdRng::seed_from_u64(3);
        let rng: &mut dyn RngCore = &mut seeded;
        let mut g = MazeGraph::new(4, 4);
        g.add_edge(t(0, 0), t(1, 0));
        for _ in 0..20 {
            let r = g.random_tile(rng).unwrap();
            assert!(r == t(0, 0) || r == t(1, 0));
        }
    }

    #[test]
    fn walkable_edges_on_single_row_and_column() {
        let row = open_grid(4, 1);
        assert_eq!(row.vertex_count(), 4);
        assert_eq!(row.edge_count(), 3);
        let col = open_grid(1, 3);
        assert_eq!(col.edge_count(), 2);
        assert_eq!(col.adjacent(t(0, 1)).unwrap(), vec![t(0, 0), t(0, 2)]);
    }
}
