//! The [`CellState`] classification attached to each board cell.

/// Classification of a single board cell.
///
/// `Empty`, `Wall`, `Start` and `End` are the static identity of a cell;
/// `Visited` and `Path` are layered over `Empty` cells transiently by the
/// animation protocol and cleared again at the start of the next run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Wall,
    Start,
    End,
    Visited,
    Path,
}

impl CellState {
    /// Whether this state is a run-derived marking rather than part of the
    /// cell's static identity.
    #[inline]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::Visited | Self::Path)
    }

    /// Whether movement through this cell is blocked.
    #[inline]
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::Wall)
    }
}
