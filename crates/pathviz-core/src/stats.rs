//! The per-run [`SimulationStats`] record.

/// Summary statistics published once at the end of every run.
///
/// `visited_count` is the number of cells marked visited during the
/// discovery replay (the start cell is never counted); `path_length` is the
/// number of cells marked as path, i.e. the cells strictly between the
/// start and end cells. Both are zero when the end is unreachable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationStats {
    /// Wall-clock duration of the whole run, search plus animation.
    pub duration_ms: u64,
    /// Cells scanned before the end cell was reached (or the frontier
    /// exhausted).
    pub visited_count: usize,
    /// Cells on the shortest path, endpoints excluded.
    pub path_length: usize,
}
