//! Per-lift queue processor — the two-state lift state machine.
//!
//! ```text
//!            queue non-empty: pop head, floor := head, start transit
//!   ┌──────┐ ─────────────────────────────────────────────▶ ┌────────┐
//!   │ Idle │                                                │ Moving │
//!   └──────┘ ◀───────────────────────────────────────────── └────────┘
//!            travel_ticks elapsed: clear transit
//! ```
//!
//! Every transit lasts `travel_ticks`, however many floors it spans.  After
//! an arrival the coordinator immediately calls [`QueueProcessor::depart`]
//! again, which reads the lift's queue as it is *now*, including stops
//! appended while the lift was in flight.
//!
//! There is no cancelled or failed state: a started transit always
//! completes.

use lift_core::Tick;
use lift_fleet::{Lift, Transit};

/// Which state-machine state a lift is in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LiftPhase {
    Idle,
    Moving { arrives: Tick },
}

/// Drives a lift between `Idle` and `Moving`.
///
/// Holds only the fixed transit duration, so one processor serves the whole
/// fleet; each call operates on a single lift.
#[derive(Copy, Clone, Debug)]
pub struct QueueProcessor {
    travel_ticks: u64,
}

impl QueueProcessor {
    pub fn new(travel_ticks: u64) -> Self {
        Self { travel_ticks }
    }

    #[inline]
    pub fn travel_ticks(&self) -> u64 {
        self.travel_ticks
    }

    pub fn phase(lift: &Lift) -> LiftPhase {
        match lift.transit() {
            None    => LiftPhase::Idle,
            Some(t) => LiftPhase::Moving { arrives: t.arrives },
        }
    }

    /// `Idle → Moving`.
    ///
    /// Pops the head of the queue and starts a transit to it at `now`.
    /// Returns `None` (and changes nothing) if the lift is already moving or
    /// has nothing queued.
    pub fn depart(&self, lift: &mut Lift, now: Tick) -> Option<Transit> {
        if lift.is_moving() {
            return None;
        }
        let next = lift.pop_stop()?;
        let transit = Transit::new(lift.current_floor(), next, now, now + self.travel_ticks);
        lift.start_transit(transit);
        Some(transit)
    }

    /// `Moving → Idle`.
    ///
    /// Completes the lift's transit if it is due at or before `now` and
    /// returns it.  Returns `None` for an idle lift or one whose transit is
    /// still in flight, so a stray wake-up is harmless.
    pub fn arrive(&self, lift: &mut Lift, now: Tick) -> Option<Transit> {
        match lift.transit() {
            Some(t) if t.arrives <= now => lift.clear_transit(),
            _ => None,
        }
    }
}
