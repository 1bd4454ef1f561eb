//! Direction of travel reported by a lift.

/// Which way a lift is travelling.
///
/// `Idle` is reported exactly when the lift has no transit in flight; a
/// moving lift is always `Up` or `Down`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl Direction {
    /// Direction of a move from `from` to `to`.
    ///
    /// Only a strictly higher target counts as `Up`; a move to the same floor
    /// reports `Down`.  Panels display this value, so it is kept as is.
    #[inline]
    pub fn toward(from: crate::Floor, to: crate::Floor) -> Direction {
        if to > from { Direction::Up } else { Direction::Down }
    }

    /// `true` for `Up` and `Down`.
    #[inline]
    pub fn is_moving(self) -> bool {
        !matches!(self, Direction::Idle)
    }

    /// Lowercase label, used for CSV columns and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
            Direction::Idle => "idle",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
