//! The [`StepSink`] publication/pacing seam.

use std::time::Duration;

use pathviz_core::Board;

/// Receiver for the animation protocol's step-wise output.
///
/// The replay loop stays synchronous and free of timing concerns: after
/// every board mutation it hands the sink a snapshot to publish, then asks
/// it to suspend for the configured delay. A front-end sink sleeps and
/// forwards snapshots to its observers; a test sink records and returns
/// immediately.
pub trait StepSink {
    /// Publish a new board snapshot.
    fn publish(&mut self, board: &Board);

    /// Suspend the run between steps. `delay` may be zero.
    fn pause(&mut self, delay: Duration);
}
