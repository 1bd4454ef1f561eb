//! Per-lift mutable state.

use std::collections::VecDeque;

use lift_core::{Direction, Floor, LiftId, Tick};

use crate::LiftSnapshot;

// ── Transit ───────────────────────────────────────────────────────────────────

/// One in-flight move.
///
/// The lift's authoritative floor is already `to` while the transit is in
/// flight; `from` and the two ticks are kept so a renderer can interpolate
/// the car's on-screen position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transit {
    pub from:      Floor,
    pub to:        Floor,
    pub direction: Direction,
    pub departed:  Tick,
    pub arrives:   Tick,
}

impl Transit {
    pub fn new(from: Floor, to: Floor, departed: Tick, arrives: Tick) -> Self {
        Self {
            from,
            to,
            direction: Direction::toward(from, to),
            departed,
            arrives,
        }
    }

    /// Fraction of the transit completed at `now`, in `[0.0, 1.0]`.
    pub fn progress(&self, now: Tick) -> f32 {
        if self.arrives <= self.departed {
            return 1.0;
        }
        let elapsed = now.since(self.departed) as f32;
        let total   = (self.arrives - self.departed) as f32;
        (elapsed / total).min(1.0)
    }
}

// ── Lift ──────────────────────────────────────────────────────────────────────

/// A single lift car.
///
/// Fields are private: the only mutations are appending a stop, popping the
/// head stop, starting a transit, and clearing it.  Each keeps the lift's
/// fields mutually consistent, so a snapshot taken between any two calls is
/// valid.
#[derive(Clone, Debug)]
pub struct Lift {
    id:            LiftId,
    current_floor: Floor,
    transit:       Option<Transit>,
    queue:         VecDeque<Floor>,
}

impl Lift {
    /// A new idle lift on the ground floor with an empty queue.
    pub fn new(id: LiftId) -> Self {
        Self::at(id, Floor::GROUND)
    }

    /// A new idle lift parked at `floor`.
    pub fn at(id: LiftId, floor: Floor) -> Self {
        Self {
            id,
            current_floor: floor,
            transit:       None,
            queue:         VecDeque::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> LiftId {
        self.id
    }

    /// The most recently dispatched target (or the parking floor).
    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.transit.map_or(Direction::Idle, |t| t.direction)
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.transit.is_some()
    }

    #[inline]
    pub fn transit(&self) -> Option<&Transit> {
        self.transit.as_ref()
    }

    /// Pending stops in service order.
    #[inline]
    pub fn queue(&self) -> &VecDeque<Floor> {
        &self.queue
    }

    /// Idle with nothing queued: the only lifts nearest-idle dispatch
    /// considers.
    #[inline]
    pub fn is_available(&self) -> bool {
        !self.is_moving() && self.queue.is_empty()
    }

    /// Append a stop.  Duplicates are kept.
    pub fn push_stop(&mut self, floor: Floor) {
        self.queue.push_back(floor);
    }

    /// Remove and return the head of the queue.
    pub fn pop_stop(&mut self) -> Option<Floor> {
        self.queue.pop_front()
    }

    /// Enter the moving state.  The floor jumps to the target immediately.
    pub fn start_transit(&mut self, transit: Transit) {
        debug_assert!(self.transit.is_none(), "{} already in transit", self.id);
        self.current_floor = transit.to;
        self.transit = Some(transit);
    }

    /// Leave the moving state, returning the transit that just finished.
    pub fn clear_transit(&mut self) -> Option<Transit> {
        self.transit.take()
    }

    /// Owned copy of every observable field.
    pub fn snapshot(&self) -> LiftSnapshot {
        LiftSnapshot {
            id:            self.id,
            current_floor: self.current_floor,
            direction:     self.direction(),
            is_moving:     self.is_moving(),
            request_queue: self.queue.iter().copied().collect(),
            transit:       self.transit,
        }
    }
}
