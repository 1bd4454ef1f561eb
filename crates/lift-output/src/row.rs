//! Plain data row types written by output backends.

use std::fmt;

/// One lift's state at a snapshot tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiftSnapshotRow {
    pub tick:          u64,
    pub elapsed_ms:    u64,
    /// 1-based lift number as shown on the panel.
    pub lift:          u32,
    pub current_floor: u32,
    /// `"up"`, `"down"` or `"idle"`.
    pub direction:     &'static str,
    pub is_moving:     bool,
    /// Queued floors in service order, space separated.  Empty when the
    /// queue is empty.
    pub request_queue: String,
}

/// What happened in a [`LiftEventRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiftEventKind {
    Assigned,
    Rejected,
    Departed,
    Arrived,
}

impl LiftEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LiftEventKind::Assigned => "assigned",
            LiftEventKind::Rejected => "rejected",
            LiftEventKind::Departed => "departed",
            LiftEventKind::Arrived  => "arrived",
        }
    }
}

impl fmt::Display for LiftEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dispatch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiftEventRow {
    pub tick:       u64,
    pub elapsed_ms: u64,
    pub event:      LiftEventKind,
    /// 1-based lift number; `None` for rejected requests.
    pub lift:       Option<u32>,
    /// Departure floor for `Departed`, otherwise `None`.
    pub from_floor: Option<u32>,
    /// Requested, target or arrival floor.
    pub floor:      u32,
}
