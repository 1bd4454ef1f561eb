//! `FleetStore` — the fixed, index-addressed collection of lifts.

use lift_core::{LiftError, LiftId, LiftResult, Tick};

use crate::{FleetSnapshot, Lift};

/// Every lift in the fleet, indexed by `LiftId`.
///
/// The length is fixed at construction.  Lifts are addressed individually
/// through [`get`](Self::get) / [`get_mut`](Self::get_mut); updating one
/// lift never touches the others.
pub struct FleetStore {
    lifts: Vec<Lift>,
}

impl FleetStore {
    /// `count` idle lifts on the ground floor.
    pub fn new(count: usize) -> Self {
        let lifts = (0..count as u32).map(|i| Lift::new(LiftId(i))).collect();
        Self { lifts }
    }

    pub(crate) fn from_lifts(lifts: Vec<Lift>) -> Self {
        Self { lifts }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lifts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lifts.is_empty()
    }

    /// Lifts in fleet order.
    pub fn iter(&self) -> impl Iterator<Item = &Lift> + '_ {
        self.lifts.iter()
    }

    /// All `LiftId`s in ascending (fleet) order.
    pub fn lift_ids(&self) -> impl Iterator<Item = LiftId> + '_ {
        (0..self.lifts.len() as u32).map(LiftId)
    }

    /// The first lift in fleet order.
    pub fn first(&self) -> Option<&Lift> {
        self.lifts.first()
    }

    pub fn get(&self, id: LiftId) -> LiftResult<&Lift> {
        self.lifts
            .get(id.index())
            .ok_or(LiftError::InternalInconsistency(id))
    }

    pub fn get_mut(&mut self, id: LiftId) -> LiftResult<&mut Lift> {
        self.lifts
            .get_mut(id.index())
            .ok_or(LiftError::InternalInconsistency(id))
    }

    /// `true` if no lift is moving and every queue is empty.
    pub fn is_quiescent(&self) -> bool {
        self.lifts.iter().all(Lift::is_available)
    }

    /// Owned copy of every lift's state.
    pub fn snapshot(&self, tick: Tick, total_floors: u32) -> FleetSnapshot {
        FleetSnapshot {
            tick,
            total_floors,
            lifts: self.lifts.iter().map(Lift::snapshot).collect(),
        }
    }
}
