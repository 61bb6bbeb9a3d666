//! The [`Board`] — a fixed-size grid of [`CellState`]s with value semantics.
//!
//! Unlike a shared-buffer grid, a `Board` owns its cells outright: `Clone`
//! is the snapshot operation, so every published frame is an independent
//! copy and readers never observe a torn state.

use crate::cell::CellState;
use crate::position::Position;

/// Default board dimensions.
pub const DEFAULT_ROWS: i32 = 20;
/// Default board dimensions.
pub const DEFAULT_COLS: i32 = 12;

/// A fixed `rows × cols` grid of [`CellState`]s with one `Start` and one
/// `End` cell whose positions never change for the lifetime of the board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    rows: i32,
    cols: i32,
    start: Position,
    end: Position,
    cells: Vec<CellState>,
}

impl Board {
    /// Create a board with `Start` in the top-left corner and `End` in the
    /// bottom-right corner.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::with_endpoints(
            rows,
            cols,
            Position::ZERO,
            Position::new(rows - 1, cols - 1),
        )
    }

    /// Create a board with explicit endpoint positions.
    ///
    /// Panics if the dimensions are non-positive, an endpoint lies outside
    /// the board, or the endpoints coincide.
    pub fn with_endpoints(rows: i32, cols: i32, start: Position, end: Position) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be positive");
        assert!(start != end, "start and end must be distinct cells");
        let mut board = Self {
            rows,
            cols,
            start,
            end,
            cells: vec![CellState::Empty; (rows * cols) as usize],
        };
        assert!(
            board.contains(start) && board.contains(end),
            "endpoints must lie on the board"
        );
        let si = board.idx(start);
        let ei = board.idx(end);
        board.cells[si] = CellState::Start;
        board.cells[ei] = CellState::End;
        board
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The fixed start cell.
    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// The fixed end cell.
    #[inline]
    pub fn end(&self) -> Position {
        self.end
    }

    /// Whether `p` lies on the board.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    #[inline]
    fn idx(&self, p: Position) -> usize {
        (p.row * self.cols + p.col) as usize
    }

    /// The state of the cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Position) -> Option<CellState> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.idx(p)])
    }

    /// Whether a search may step onto `p`: on the board and not a wall.
    #[inline]
    pub fn is_walkable(&self, p: Position) -> bool {
        self.at(p).is_some_and(|c| !c.is_blocking())
    }

    /// Toggle a wall at `p`. Flips `Empty` ↔ `Wall` only; out-of-bounds
    /// positions, the endpoints, and cells still carrying run markings are
    /// left untouched. Returns whether the cell changed.
    pub fn toggle_wall(&mut self, p: Position) -> bool {
        if !self.contains(p) || p == self.start || p == self.end {
            return false;
        }
        let i = self.idx(p);
        match self.cells[i] {
            CellState::Empty => {
                self.cells[i] = CellState::Wall;
                true
            }
            CellState::Wall => {
                self.cells[i] = CellState::Empty;
                true
            }
            _ => false,
        }
    }

    /// Mark `p` as visited. Only `Empty` cells take the marking; the
    /// endpoints and walls keep their identity.
    pub fn mark_visited(&mut self, p: Position) {
        if self.at(p) == Some(CellState::Empty) {
            let i = self.idx(p);
            self.cells[i] = CellState::Visited;
        }
    }

    /// Mark `p` as part of the final path. Overwrites the `Visited` marking
    /// left by the discovery replay (or `Empty`, if the cell was never
    /// visited); endpoints and walls keep their identity.
    pub fn mark_path(&mut self, p: Position) {
        if matches!(
            self.at(p),
            Some(CellState::Empty) | Some(CellState::Visited)
        ) {
            let i = self.idx(p);
            self.cells[i] = CellState::Path;
        }
    }

    /// Restore every `Visited`/`Path` cell to `Empty`, leaving walls and
    /// endpoints untouched. Run-start visual clear: walls persist across
    /// runs, only markings are dropped.
    pub fn clear_transient(&mut self) {
        for c in self.cells.iter_mut() {
            if c.is_transient() {
                *c = CellState::Empty;
            }
        }
    }

    /// Rebuild the board to its initial configuration: all `Empty` except
    /// the fixed `Start`/`End` cells.
    pub fn reset(&mut self) {
        *self = Self::with_endpoints(self.rows, self.cols, self.start, self.end);
    }

    /// Count cells in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Row-major iterator over `(Position, CellState)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells.iter().enumerate().map(|(i, &c)| {
            let row = i as i32 / self.cols;
            let col = i as i32 % self.cols;
            (Position::new(row, col), c)
        })
    }
}

impl Default for Board {
    /// The reference 20×12 configuration.
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip() {
        let mut b = Board::new(5, 3);
        b.toggle_wall(Position::new(2, 1));
        let json = serde_json::to_string(&b).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }

    #[test]
    fn position_round_trip() {
        let p = Position::new(7, 3);
        let json = serde_json::to_string(&p).unwrap();
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
