//! The staged animation/emission protocol.

use std::time::Duration;

use pathviz_core::{Algorithm, Board, CellState};
use pathviz_search::SearchField;

use crate::sink::StepSink;

/// Per-step delays of the animation protocol. Presentation pacing only —
/// correctness never depends on these values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// Delay after each visited-cell publication.
    pub visit: Duration,
    /// Delay after each path-cell publication.
    pub path: Duration,
}

impl Pacing {
    /// No delays at all; replays complete as fast as they publish.
    pub const NONE: Self = Self {
        visit: Duration::ZERO,
        path: Duration::ZERO,
    };

    /// The reference pacing for an algorithm: 10 ms per visited cell for
    /// BFS and A*, 5 ms for Dijkstra, 20 ms per path cell everywhere.
    pub const fn for_algorithm(algo: Algorithm) -> Self {
        let visit = match algo {
            Algorithm::Bfs | Algorithm::Astar => Duration::from_millis(10),
            Algorithm::Dijkstra => Duration::from_millis(5),
        };
        Self {
            visit,
            path: Duration::from_millis(20),
        }
    }
}

/// Replay a completed search as a paced sequence of published snapshots.
///
/// First the discovery stage: every settled cell whose role is not the
/// start is marked `Visited`, published, counted, and followed by a
/// suspension. Then the path-reveal stage: the parent chain is walked
/// backward from the end cell, marking each intermediate cell `Path` the
/// same way. An end cell without a parent entry simply yields an empty
/// second stage — unreachable goals are a defined outcome, not an error.
///
/// Returns `(visited_count, path_length)`.
pub fn replay(
    board: &mut Board,
    field: &SearchField,
    pacing: Pacing,
    sink: &mut dyn StepSink,
) -> (usize, usize) {
    let mut visited_count = 0;
    for &p in field.expanded() {
        if board.at(p) == Some(CellState::Start) {
            continue;
        }
        board.mark_visited(p);
        sink.publish(board);
        visited_count += 1;
        sink.pause(pacing.visit);
    }

    let mut path_length = 0;
    for &p in &field.backtrace(board.end()) {
        board.mark_path(p);
        sink.publish(board);
        path_length += 1;
        sink.pause(pacing.path);
    }

    (visited_count, path_length)
}
