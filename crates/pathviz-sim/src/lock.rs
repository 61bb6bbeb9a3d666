//! The [`RunLock`] — the single "a run is in progress" flag.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A shared boolean gating the whole command surface: while held, edits,
/// resets and new runs are rejected. Acquired when a run starts and
/// released only when the run's finalization completes — never on an early
/// failure path, so a blocked search still flows through stats publication
/// before the lock opens again.
#[derive(Clone, Debug)]
pub struct RunLock {
    held: Arc<AtomicBool>,
}

impl RunLock {
    /// Create a new, free lock.
    pub fn new() -> Self {
        Self {
            held: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a run is currently in progress.
    #[inline]
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }

    /// Try to acquire the lock. Returns `false` if a run is already in
    /// progress.
    #[inline]
    pub fn try_acquire(&self) -> bool {
        self.held
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Release the lock.
    #[inline]
    pub fn release(&self) {
        self.held.store(false, Ordering::Release);
    }
}

impl Default for RunLock {
    fn default() -> Self {
        Self::new()
    }
}
