use pathviz_core::Position;

/// Sentinel value meaning "not reached" in cost queries.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Internal node bookkeeping
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    /// Best known cost from the source.
    pub(crate) g: i32,
    /// Heap priority at the last push (g for Dijkstra, g + h for A*).
    pub(crate) f: i32,
    /// Index of the node this one was reached from; `usize::MAX` for the
    /// source and for untouched nodes.
    pub(crate) parent: usize,
    /// Lazy-invalidation stamp: entries from older searches are ignored.
    pub(crate) generation: u32,
    /// Frontier-membership flag (A* duplicate suppression).
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct HeapEntry {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchField
// ---------------------------------------------------------------------------

/// Central coordinator for searches over a `rows × cols` grid.
///
/// `SearchField` owns all per-search state (the flat node array, the
/// settled-order vector, a neighbour scratch buffer) so that repeated
/// searches reuse allocations. Between searches the node array is
/// invalidated lazily by bumping a generation counter rather than by
/// clearing it.
pub struct SearchField {
    rows: i32,
    cols: i32,
    width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) expanded: Vec<Position>,
    // shared scratch buffer for neighbour queries
    pub(crate) nbuf: Vec<Position>,
}

impl SearchField {
    /// Create a field for the given grid dimensions.
    pub fn new(rows: i32, cols: i32) -> Self {
        let len = (rows.max(0) as usize) * (cols.max(0) as usize);
        Self {
            rows,
            cols,
            width: cols.max(0) as usize,
            nodes: vec![Node::default(); len],
            generation: 0,
            expanded: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Number of rows covered by the field.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns covered by the field.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The positions settled by the last search, in settlement order. The
    /// source is first; the goal never appears (searches stop the moment it
    /// is dequeued).
    #[inline]
    pub fn expanded(&self) -> &[Position] {
        &self.expanded
    }

    /// Cost of the last search at `p`, or [`UNREACHABLE`] if `p` is outside
    /// the field or was never touched.
    pub fn cost_at(&self, p: Position) -> i32 {
        match self.idx(p) {
            Some(i) if self.nodes[i].generation == self.generation => self.nodes[i].g,
            _ => UNREACHABLE,
        }
    }

    /// Walk the parent pointers of the last search backward from `to`,
    /// returning the positions strictly between `to` and the source,
    /// goal-side first. Empty when `to` was never reached (including when it
    /// is the source itself or adjacent to it).
    pub fn backtrace(&self, to: Position) -> Vec<Position> {
        let mut path = Vec::new();
        let Some(ti) = self.idx(to) else {
            return path;
        };
        if self.nodes[ti].generation != self.generation {
            return path;
        }
        let mut ci = self.nodes[ti].parent;
        // The source is the only reached node without a parent.
        while ci != usize::MAX && self.nodes[ci].parent != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Position` to a flat index. Returns `None` if outside the
    /// field.
    #[inline]
    pub(crate) fn idx(&self, p: Position) -> Option<usize> {
        if p.row < 0 || p.row >= self.rows || p.col < 0 || p.col >= self.cols {
            return None;
        }
        Some((p.row as usize) * self.width + (p.col as usize))
    }

    /// Convert a flat index back to a `Position`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Position {
        Position::new((idx / self.width) as i32, (idx % self.width) as i32)
    }

    /// Start a fresh search: bump the generation so stale nodes are ignored
    /// and clear the settled-order vector. Returns the new generation.
    pub(crate) fn begin(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.expanded.clear();
        self.generation
    }

    /// Initialise the source node for the current generation.
    pub(crate) fn seed(&mut self, idx: usize, f: i32) {
        let node = &mut self.nodes[idx];
        node.g = 0;
        node.f = f;
        node.parent = usize::MAX;
        node.generation = self.generation;
        node.open = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{AstarPather, Pather, WeightedPather};
    use crate::manhattan;
    use std::collections::HashSet;

    /// A rows × cols lattice with a wall set, unit edge costs, and the
    /// Manhattan heuristic.
    struct TestMap {
        rows: i32,
        cols: i32,
        walls: HashSet<Position>,
    }

    impl TestMap {
        fn open(rows: i32, cols: i32) -> Self {
            Self {
                rows,
                cols,
                walls: HashSet::new(),
            }
        }

        fn with_walls(rows: i32, cols: i32, walls: &[(i32, i32)]) -> Self {
            Self {
                rows,
                cols,
                walls: walls.iter().map(|&(r, c)| Position::new(r, c)).collect(),
            }
        }
    }

    impl Pather for TestMap {
        fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
            for n in p.cardinal_neighbors() {
                if n.row >= 0
                    && n.row < self.rows
                    && n.col >= 0
                    && n.col < self.cols
                    && !self.walls.contains(&n)
                {
                    buf.push(n);
                }
            }
        }
    }

    impl WeightedPather for TestMap {
        fn cost(&self, _from: Position, _to: Position) -> i32 {
            1
        }
    }

    impl AstarPather for TestMap {
        fn estimate(&self, from: Position, to: Position) -> i32 {
            manhattan(from, to)
        }
    }

    fn run_all(map: &TestMap, from: Position, to: Position) -> Vec<(bool, Vec<Position>, usize)> {
        let mut out = Vec::new();
        for which in 0..3 {
            let mut field = SearchField::new(map.rows, map.cols);
            let reached = match which {
                0 => field.bfs(map, from, to),
                1 => field.dijkstra(map, from, to),
                _ => field.astar(map, from, to),
            };
            let trail = field.backtrace(to);
            out.push((reached, trail, field.expanded().len()));
        }
        out
    }

    #[test]
    fn open_grid_all_algorithms_agree_on_path_length() {
        let map = TestMap::open(4, 4);
        let results = run_all(&map, Position::new(0, 0), Position::new(3, 3));
        for (reached, trail, _) in &results {
            assert!(reached);
            // Six steps corner to corner; five cells strictly between.
            assert_eq!(trail.len(), 5);
        }
    }

    #[test]
    fn walled_grid_all_algorithms_agree_on_path_length() {
        // A partial wall forces a detour around row 2.
        let map = TestMap::with_walls(5, 5, &[(2, 0), (2, 1), (2, 2), (2, 3)]);
        let results = run_all(&map, Position::new(0, 0), Position::new(4, 0));
        // Detour: down the right side and back — 12 steps, 11 cells between.
        for (reached, trail, _) in &results {
            assert!(reached);
            assert_eq!(trail.len(), 11);
        }
    }

    #[test]
    fn unreachable_goal_yields_empty_backtrace() {
        // Full wall column with no gap.
        let map = TestMap::with_walls(4, 4, &[(0, 2), (1, 2), (2, 2), (3, 2)]);
        let results = run_all(&map, Position::new(0, 0), Position::new(3, 3));
        for (reached, trail, expanded) in &results {
            assert!(!reached);
            assert!(trail.is_empty());
            // The start's connected region is the two leftmost columns.
            assert_eq!(*expanded, 8);
        }
    }

    #[test]
    fn walled_in_start_settles_only_itself() {
        let map = TestMap::with_walls(4, 4, &[(0, 1), (1, 0)]);
        let mut field = SearchField::new(4, 4);
        let reached = field.bfs(&map, Position::new(0, 0), Position::new(3, 3));
        assert!(!reached);
        assert_eq!(field.expanded(), &[Position::new(0, 0)]);
        assert!(field.backtrace(Position::new(3, 3)).is_empty());
    }

    #[test]
    fn adjacent_goal_has_empty_backtrace() {
        let map = TestMap::open(1, 2);
        let results = run_all(&map, Position::new(0, 0), Position::new(0, 1));
        for (reached, trail, expanded) in &results {
            assert!(reached);
            assert!(trail.is_empty());
            assert_eq!(*expanded, 1);
        }
    }

    #[test]
    fn searches_are_deterministic() {
        let map = TestMap::with_walls(6, 6, &[(1, 1), (2, 3), (3, 3), (4, 1), (4, 4)]);
        let from = Position::new(0, 0);
        let to = Position::new(5, 5);
        for which in 0..3 {
            let mut a = SearchField::new(6, 6);
            let mut b = SearchField::new(6, 6);
            match which {
                0 => {
                    a.bfs(&map, from, to);
                    b.bfs(&map, from, to);
                }
                1 => {
                    a.dijkstra(&map, from, to);
                    b.dijkstra(&map, from, to);
                }
                _ => {
                    a.astar(&map, from, to);
                    b.astar(&map, from, to);
                }
            }
            assert_eq!(a.expanded(), b.expanded());
            assert_eq!(a.backtrace(to), b.backtrace(to));
        }
    }

    #[test]
    fn field_reuse_across_searches() {
        let map = TestMap::open(4, 4);
        let mut field = SearchField::new(4, 4);
        field.bfs(&map, Position::new(0, 0), Position::new(3, 3));
        let first = field.expanded().to_vec();
        // Stale results from the previous generation must not leak.
        field.astar(&map, Position::new(0, 0), Position::new(3, 3));
        assert!(field.cost_at(Position::new(0, 0)) == 0);
        field.bfs(&map, Position::new(0, 0), Position::new(3, 3));
        assert_eq!(field.expanded(), &first[..]);
    }

    #[test]
    fn bfs_settles_in_nondecreasing_distance_order() {
        let map = TestMap::with_walls(6, 6, &[(1, 2), (2, 2), (3, 2), (4, 2)]);
        let mut field = SearchField::new(6, 6);
        field.bfs(&map, Position::new(0, 0), Position::new(5, 5));
        let costs: Vec<i32> = field
            .expanded()
            .iter()
            .map(|&p| field.cost_at(p))
            .collect();
        assert!(costs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn dijkstra_matches_bfs_distances_on_unit_grid() {
        let map = TestMap::with_walls(6, 6, &[(0, 3), (1, 3), (2, 3), (4, 2), (5, 2)]);
        let from = Position::new(0, 0);
        let to = Position::new(5, 5);
        let mut bfs_field = SearchField::new(6, 6);
        bfs_field.bfs(&map, from, to);
        let mut dij_field = SearchField::new(6, 6);
        dij_field.dijkstra(&map, from, to);
        for &p in dij_field.expanded() {
            assert_eq!(dij_field.cost_at(p), bfs_field.cost_at(p), "at {p}");
        }
    }

    #[test]
    fn astar_path_costs_are_optimal() {
        let map = TestMap::with_walls(8, 8, &[(1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6)]);
        let from = Position::new(0, 0);
        let to = Position::new(7, 7);
        let mut bfs_field = SearchField::new(8, 8);
        assert!(bfs_field.bfs(&map, from, to));
        let mut a_field = SearchField::new(8, 8);
        assert!(a_field.astar(&map, from, to));
        assert_eq!(
            a_field.backtrace(to).len(),
            bfs_field.backtrace(to).len()
        );
    }

    #[test]
    fn backtrace_is_goal_side_first_and_contiguous() {
        let map = TestMap::open(4, 4);
        let to = Position::new(3, 3);
        let mut field = SearchField::new(4, 4);
        field.bfs(&map, Position::new(0, 0), to);
        let trail = field.backtrace(to);
        // First entry is adjacent to the goal, last is adjacent to the start.
        assert_eq!(manhattan(trail[0], to), 1);
        assert_eq!(manhattan(*trail.last().unwrap(), Position::new(0, 0)), 1);
        for w in trail.windows(2) {
            assert_eq!(manhattan(w[0], w[1]), 1);
        }
    }

    #[test]
    fn out_of_bounds_endpoints_are_rejected() {
        let map = TestMap::open(4, 4);
        let mut field = SearchField::new(4, 4);
        assert!(!field.bfs(&map, Position::new(-1, 0), Position::new(3, 3)));
        assert!(!field.dijkstra(&map, Position::new(0, 0), Position::new(4, 0)));
        assert!(!field.astar(&map, Position::new(9, 9), Position::new(3, 3)));
    }
}
