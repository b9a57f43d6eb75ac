//! Shared termination signal for search workers.

use std::sync::atomic::{AtomicBool, Ordering};

/// Monotonic found-flag shared by every worker of one search call.
///
/// Goes from false to true at most once. Polling uses relaxed loads: a stale
/// `false` only means a worker scans a little longer.
#[derive(Debug, Default)]
pub struct FoundFlag {
    found: AtomicBool,
}

impl FoundFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cheap poll used inside the scan loop.
    pub fn is_set(&self) -> bool {
        self.found.load(Ordering::Relaxed)
    }

    /// Publish a match. Returns true if this call flipped the flag.
    pub fn set(&self) -> bool {
        self.found
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Final value, read by the coordinator after every worker has joined.
    pub fn get(&self) -> bool {
        self.found.load(Ordering::Acquire)
    }
}
