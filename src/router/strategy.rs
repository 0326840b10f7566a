//! Pluggable selection over a non-empty list of refs.

// Layer 1: Standard library imports
use std::sync::atomic::{AtomicUsize, Ordering};

/// Picks an index in `0..len` given the current size of a registration
/// list. Implementations are shared across calls (behind an `Arc`) and
/// must be internally synchronized.
pub trait Strategy: Send + Sync {
    /// `len` is always greater than zero — the router only calls this once
    /// it has confirmed the registration list is non-empty.
    fn select(&self, len: usize) -> usize;
}

/// Monotonically increasing counter, index = `counter++ mod len`. The
/// counter is never reset on membership change, so distribution stays fair
/// in the long run even as actors join or leave.
#[derive(Debug, Default)]
pub struct RoundRobin {
    counter: AtomicUsize,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for RoundRobin {
    fn select(&self, len: usize) -> usize {
        self.counter.fetch_add(1, Ordering::Relaxed) % len
    }
}
