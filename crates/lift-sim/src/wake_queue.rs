//! `WakeQueue` — sparse per-tick lift activation queue.
//!
//! When a lift departs it registers the tick its transit completes.  Each
//! tick the simulation drains only the lifts due at that tick, so idle lifts
//! cost nothing and lifts in flight never need polling.
//!
//! A moving lift has exactly one entry (its arrival tick); an idle lift has
//! none.  The queue is therefore empty exactly when the whole fleet is at
//! rest, which is what `Sim::run_until_idle` checks.

use std::collections::BTreeMap;

use lift_core::{LiftId, Tick};

/// A priority queue mapping simulation ticks → lifts that must wake then.
#[derive(Default, Debug)]
pub struct WakeQueue {
    inner: BTreeMap<Tick, Vec<LiftId>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl WakeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `lift` to wake at `tick`.
    pub fn push(&mut self, tick: Tick, lift: LiftId) {
        self.inner.entry(tick).or_default().push(lift);
        self.total += 1;
    }

    /// Remove and return all lifts scheduled for exactly `tick`, in the
    /// order they were pushed.
    ///
    /// Returns `None` if nothing is due (the common case).
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<LiftId>> {
        let lifts = self.inner.remove(&tick)?;
        self.total -= lifts.len();
        Some(lifts)
    }

    /// The earliest tick with at least one queued lift, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
