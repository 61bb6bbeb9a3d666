//! The [`Algorithm`] selector.

use std::fmt;

/// The graph-search algorithm driving a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    Bfs,
    Dijkstra,
    Astar,
}

impl Algorithm {
    /// All algorithms, in selector order.
    pub const ALL: [Algorithm; 3] = [Self::Bfs, Self::Dijkstra, Self::Astar];

    /// Human-readable title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Bfs => "Breadth-First Search",
            Self::Dijkstra => "Dijkstra's Algorithm",
            Self::Astar => "A* (A-Star) Search",
        }
    }

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dijkstra => "Dijkstra",
            Self::Astar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
