//! Strongly typed lift identifier.
//!
//! `LiftId` is the lift's index in fleet order, so it doubles as a direct
//! `Vec` index into the fleet store.  Fleet order is insertion order and
//! never changes, which makes the id stable for the life of a simulation.

use std::fmt;

/// Index of a lift in the fleet.  Assigned at fleet creation, immutable.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiftId(pub u32);

impl LiftId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based number shown on a control panel ("Lift 1", "Lift 2", …).
    #[inline]
    pub fn number(self) -> u32 {
        self.0 + 1
    }
}

impl fmt::Display for LiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lift {}", self.number())
    }
}

impl From<LiftId> for usize {
    #[inline(always)]
    fn from(id: LiftId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for LiftId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<LiftId, Self::Error> {
        u32::try_from(n).map(LiftId)
    }
}
