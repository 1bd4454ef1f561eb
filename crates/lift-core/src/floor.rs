//! Building floors.

use std::fmt;

/// A floor number, 1-indexed, where `1` is the ground floor.
///
/// Range checks against the building height live in
/// [`FleetConfig::check_floor`][crate::FleetConfig::check_floor]; a bare
/// `Floor` may hold any value so that out-of-range requests can be reported
/// back verbatim.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Floor(pub u32);

impl Floor {
    pub const GROUND: Floor = Floor(1);

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    #[inline]
    pub fn is_ground(self) -> bool {
        self == Floor::GROUND
    }

    /// Panel label: `"G"` for the ground floor, the number otherwise.
    pub fn label(self) -> String {
        if self.is_ground() {
            "G".to_owned()
        } else {
            self.0.to_string()
        }
    }
}

impl Default for Floor {
    fn default() -> Self {
        Floor::GROUND
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Floor {
    #[inline]
    fn from(n: u32) -> Floor {
        Floor(n)
    }
}
