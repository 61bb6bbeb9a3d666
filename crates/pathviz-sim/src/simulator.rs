//! The [`Simulator`] run controller and its published observable state.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use log::{debug, trace};
use parking_lot::{Condvar, Mutex};

use pathviz_core::{Algorithm, Board, Position, SimulationStats};
use pathviz_search::SearchField;

use crate::lock::RunLock;
use crate::pather::Walkable;
use crate::replay::{Pacing, replay};
use crate::sink::StepSink;

// ---------------------------------------------------------------------------
// Published state
// ---------------------------------------------------------------------------

/// One immutable snapshot of everything a front-end renders.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub board: Board,
    pub stats: SimulationStats,
    pub selected: Algorithm,
}

struct Inner {
    board: Board,
    stats: SimulationStats,
    selected: Algorithm,
    /// Drag dedup: the last cell a drag gesture touched.
    last_touched: Option<Position>,
    /// Bumped on every publication; watchers compare against it.
    version: u64,
}

impl Inner {
    fn view(&self) -> ViewState {
        ViewState {
            board: self.board.clone(),
            stats: self.stats,
            selected: self.selected,
        }
    }
}

struct Shared {
    inner: Mutex<Inner>,
    changed: Condvar,
    lock: RunLock,
}

impl Shared {
    fn bump(&self, inner: &mut Inner) {
        inner.version += 1;
        self.changed.notify_all();
    }
}

// ---------------------------------------------------------------------------
// Simulator
// ---------------------------------------------------------------------------

/// The run controller.
///
/// Owns the board and published state behind a single mutex; accepts the
/// command surface a front-end drives. At most one run executes at a time:
/// the [`RunLock`] is acquired before the run thread spawns and released
/// only after stats publication, and every other command is rejected
/// (silently, as a policy no-op) while it is held.
pub struct Simulator {
    shared: Arc<Shared>,
    pacing: Option<Pacing>,
}

impl Simulator {
    /// A simulator over the reference 20×12 board.
    pub fn new() -> Self {
        Self::with_board(Board::default())
    }

    /// A simulator over an explicit board.
    pub fn with_board(board: Board) -> Self {
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    board,
                    stats: SimulationStats::default(),
                    selected: Algorithm::Bfs,
                    last_touched: None,
                    version: 0,
                }),
                changed: Condvar::new(),
                lock: RunLock::new(),
            }),
            pacing: None,
        }
    }

    /// Override the per-algorithm pacing (used by headless runs and tests).
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = Some(pacing);
        self
    }

    /// Whether a run is currently in progress.
    pub fn is_running(&self) -> bool {
        self.shared.lock.is_held()
    }

    /// The current published state.
    pub fn snapshot(&self) -> ViewState {
        self.shared.inner.lock().view()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> StateWatcher {
        let inner = self.shared.inner.lock();
        StateWatcher {
            shared: Arc::clone(&self.shared),
            seen: inner.version,
        }
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Select the algorithm for the next run. Always allowed; a run already
    /// in progress keeps the algorithm it started with.
    pub fn select_algorithm(&self, algo: Algorithm) {
        let mut inner = self.shared.inner.lock();
        if inner.selected != algo {
            inner.selected = algo;
            self.shared.bump(&mut inner);
        }
    }

    /// Toggle a wall at `(row, col)`. Rejected while a run is in progress;
    /// the board's own rules reject the endpoints and out-of-bounds cells.
    pub fn edit_cell(&self, row: i32, col: i32) {
        if self.shared.lock.is_held() {
            trace!("edit ({row}, {col}) rejected: run in progress");
            return;
        }
        let mut inner = self.shared.inner.lock();
        if inner.board.toggle_wall(Position::new(row, col)) {
            self.shared.bump(&mut inner);
        }
    }

    /// Toggle a wall as part of a drag gesture. Repeated calls on the same
    /// cell are suppressed until [`drag_end`](Self::drag_end), so a pointer
    /// lingering over one cell does not flip it back and forth.
    pub fn drag_edit(&self, row: i32, col: i32) {
        let pos = Position::new(row, col);
        let mut inner = self.shared.inner.lock();
        if inner.last_touched == Some(pos) {
            return;
        }
        if self.shared.lock.is_held() {
            trace!("drag ({row}, {col}) rejected: run in progress");
        } else if inner.board.toggle_wall(pos) {
            self.shared.bump(&mut inner);
        }
        inner.last_touched = Some(pos);
    }

    /// End the current drag gesture, re-arming the drag dedup state.
    pub fn drag_end(&self) {
        self.shared.inner.lock().last_touched = None;
    }

    /// Rebuild the board to its initial configuration and zero the stats.
    /// Rejected while a run is in progress.
    pub fn reset(&self) {
        if self.shared.lock.is_held() {
            trace!("reset rejected: run in progress");
            return;
        }
        let mut inner = self.shared.inner.lock();
        inner.board.reset();
        inner.stats = SimulationStats::default();
        inner.last_touched = None;
        self.shared.bump(&mut inner);
    }

    /// Start a run with the currently selected algorithm.
    ///
    /// Returns `None` when a run is already in progress. Otherwise clears
    /// the previous run's markings and stats, snapshots the board, and
    /// spawns the run thread: search, paced replay, stats publication,
    /// lock release — in that order, unconditionally through to the end.
    pub fn run(&self) -> Option<JoinHandle<()>> {
        if !self.shared.lock.try_acquire() {
            debug!("run rejected: run in progress");
            return None;
        }
        let started = Instant::now();

        let (snapshot, algo) = {
            let mut inner = self.shared.inner.lock();
            inner.board.clear_transient();
            inner.stats = SimulationStats::default();
            self.shared.bump(&mut inner);
            (inner.board.clone(), inner.selected)
        };
        let pacing = self.pacing.unwrap_or_else(|| Pacing::for_algorithm(algo));
        debug!("{algo} run started on {}x{} board", snapshot.rows(), snapshot.cols());

        let shared = Arc::clone(&self.shared);
        Some(thread::spawn(move || {
            let mut field = SearchField::new(snapshot.rows(), snapshot.cols());
            let reached = dispatch(&mut field, &snapshot, algo);

            let mut working = snapshot;
            let mut sink = SharedSink {
                shared: Arc::clone(&shared),
            };
            let (visited_count, path_length) = replay(&mut working, &field, pacing, &mut sink);

            let stats = SimulationStats {
                duration_ms: started.elapsed().as_millis() as u64,
                visited_count,
                path_length,
            };
            {
                let mut inner = shared.inner.lock();
                inner.stats = stats;
                shared.bump(&mut inner);
            }
            shared.lock.release();
            debug!(
                "{algo} run finished: reached={reached} visited={visited_count} \
                 path={path_length} duration={}ms",
                stats.duration_ms
            );
        }))
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the selected search over a board snapshot.
fn dispatch(field: &mut SearchField, board: &Board, algo: Algorithm) -> bool {
    let walk = Walkable::new(board);
    let (from, to) = (board.start(), board.end());
    match algo {
        Algorithm::Bfs => field.bfs(&walk, from, to),
        Algorithm::Dijkstra => field.dijkstra(&walk, from, to),
        Algorithm::Astar => field.astar(&walk, from, to),
    }
}

/// Sink that publishes snapshots into the shared state and sleeps between
/// steps.
struct SharedSink {
    shared: Arc<Shared>,
}

impl StepSink for SharedSink {
    fn publish(&mut self, board: &Board) {
        let mut inner = self.shared.inner.lock();
        inner.board = board.clone();
        self.shared.bump(&mut inner);
    }

    fn pause(&mut self, delay: std::time::Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

// ---------------------------------------------------------------------------
// StateWatcher
// ---------------------------------------------------------------------------

/// A reader handle onto the published state.
///
/// Any number of watchers may exist; each tracks the last version it saw,
/// so [`changed`](Self::changed) reports each publication at most once.
pub struct StateWatcher {
    shared: Arc<Shared>,
    seen: u64,
}

impl StateWatcher {
    /// The current state, unconditionally.
    pub fn get(&mut self) -> ViewState {
        let inner = self.shared.inner.lock();
        self.seen = inner.version;
        inner.view()
    }

    /// The current state if it changed since the last call, else `None`.
    pub fn changed(&mut self) -> Option<ViewState> {
        let inner = self.shared.inner.lock();
        if inner.version == self.seen {
            return None;
        }
        self.seen = inner.version;
        Some(inner.view())
    }

    /// Block until the state changes, then return it.
    pub fn wait_changed(&mut self) -> ViewState {
        let mut inner = self.shared.inner.lock();
        while inner.version == self.seen {
            self.shared.changed.wait(&mut inner);
        }
        self.seen = inner.version;
        inner.view()
    }
}
