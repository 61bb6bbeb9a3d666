//! Terminal front-end for the grid pathfinding visualizer.
//!
//! Run: cargo run --bin pathviz

mod tui;

fn main() {
    if let Err(e) = tui::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
