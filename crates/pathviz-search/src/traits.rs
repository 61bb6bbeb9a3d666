use pathviz_core::Position;

/// Minimal search interface — provides passable-neighbour enumeration.
pub trait Pather {
    /// Append the passable neighbours of `p` into `buf`. The caller clears
    /// `buf` before calling. Enumeration order is the tie-break that fixes
    /// discovery order, so implementations should keep it stable.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Position, to: Position) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Position, to: Position) -> i32;
}
