//! Run controller and animation protocol for the grid pathfinding
//! visualizer.
//!
//! The [`Simulator`] owns the board and the published observable state and
//! accepts the command surface a front-end drives: select an algorithm,
//! toggle walls (tap or drag), reset, run. A run executes on its own
//! thread: the selected search runs to completion first, purely and
//! instantaneously, and the [`replay`] protocol then re-plays its
//! settlement order and final path as a paced sequence of published board
//! snapshots, finishing with a [`SimulationStats`] record. A single
//! [`RunLock`] guarantees at most one run at a time and gates edits and
//! resets while it is held.
//!
//! [`SimulationStats`]: pathviz_core::SimulationStats

mod lock;
mod pather;
mod replay;
mod simulator;
mod sink;

pub use lock::RunLock;
pub use pather::Walkable;
pub use replay::{Pacing, replay};
pub use simulator::{Simulator, StateWatcher, ViewState};
pub use sink::StepSink;
