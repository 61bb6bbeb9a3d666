//! [`Walkable`] — the board's view of the search traits.

use pathviz_core::{Board, Position};
use pathviz_search::{AstarPather, Pather, WeightedPather, manhattan};

/// Adapts a [`Board`] to the search traits: 4-directional movement, walls
/// and out-of-bounds cells impassable, unit edge costs, Manhattan
/// heuristic.
pub struct Walkable<'a> {
    board: &'a Board,
}

impl<'a> Walkable<'a> {
    /// Wrap a board snapshot for searching.
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }
}

impl Pather for Walkable<'_> {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        for np in p.cardinal_neighbors() {
            if self.board.is_walkable(np) {
                buf.push(np);
            }
        }
    }
}

impl WeightedPather for Walkable<'_> {
    fn cost(&self, _from: Position, _to: Position) -> i32 {
        1
    }
}

impl AstarPather for Walkable<'_> {
    fn estimate(&self, from: Position, to: Position) -> i32 {
        manhattan(from, to)
    }
}
