//! **pathviz-core** — Grid pathfinding visualizer (core types).
//!
//! This crate provides the foundational types shared across the *pathviz*
//! workspace: the [`Position`] coordinate type, the [`Board`] of
//! [`CellState`]s that the user paints walls onto, the [`Algorithm`]
//! selector, and the per-run [`SimulationStats`] record.

pub mod algorithm;
pub mod board;
pub mod cell;
pub mod position;
pub mod stats;

pub use algorithm::Algorithm;
pub use board::Board;
pub use cell::CellState;
pub use position::Position;
pub use stats::SimulationStats;
