//! Owned, read-only views of fleet state handed to observers.

use lift_core::{Direction, Floor, LiftId, Tick};

use crate::Transit;

/// Every observable field of one lift at one instant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiftSnapshot {
    pub id:            LiftId,
    pub current_floor: Floor,
    pub direction:     Direction,
    pub is_moving:     bool,
    pub request_queue: Vec<Floor>,
    /// The in-flight move, for display interpolation.  `None` when idle.
    pub transit:       Option<Transit>,
}

impl LiftSnapshot {
    /// `true` if the lift is at `floor` or has it queued.
    pub fn serves(&self, floor: Floor) -> bool {
        self.current_floor == floor || self.request_queue.contains(&floor)
    }
}

/// A consistent copy of the whole fleet, taken between two mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetSnapshot {
    pub tick:         Tick,
    pub total_floors: u32,
    pub lifts:        Vec<LiftSnapshot>,
}

impl FleetSnapshot {
    pub fn lift(&self, id: LiftId) -> Option<&LiftSnapshot> {
        self.lifts.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &LiftSnapshot> + '_ {
        self.lifts.iter()
    }

    /// Whether a floor's call button should be lit: some lift is at the
    /// floor or has it queued.
    pub fn is_floor_active(&self, floor: Floor) -> bool {
        self.lifts.iter().any(|l| l.serves(floor))
    }

    /// `true` if no lift is moving and every queue is empty.
    pub fn is_idle(&self) -> bool {
        self.lifts
            .iter()
            .all(|l| !l.is_moving && l.request_queue.is_empty())
    }
}
