//! Fleet configuration.

use crate::{Floor, LiftError, LiftResult, SimClock};

/// Smallest building the simulator accepts.
pub const MIN_FLOORS: u32 = 5;

/// Longest transit the simulator accepts, in ticks.  Keeps every arrival
/// tick and transit duration in milliseconds representable.
pub const MAX_TRAVEL_TICKS: u64 = u32::MAX as u64;

/// Top-level simulation configuration.
///
/// Usually built with struct-update syntax over [`FleetConfig::default`], or
/// loaded from a JSON file by the application crate (with the `serde`
/// feature, missing fields fall back to the defaults).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FleetConfig {
    /// Floors in the building, numbered `1..=total_floors`.  At least
    /// [`MIN_FLOORS`].
    pub total_floors: u32,

    /// Lifts in the fleet.  Fixed for the life of the simulation.
    pub lift_count: usize,

    /// Ticks every transit takes, whatever the distance travelled.
    pub travel_ticks: u64,

    /// Milliseconds per tick.  Only the realtime driver and reporting use it.
    pub tick_duration_ms: u32,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for FleetConfig {
    /// Eight floors, two lifts, and a 9 s transit at 1 s per tick.
    fn default() -> Self {
        Self {
            total_floors:          8,
            lift_count:            2,
            travel_ticks:          9,
            tick_duration_ms:      1_000,
            output_interval_ticks: 1,
        }
    }
}

impl FleetConfig {
    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> LiftResult<()> {
        if self.total_floors < MIN_FLOORS {
            return Err(LiftError::InvalidConfiguration(format!(
                "building needs at least {MIN_FLOORS} floors, got {}",
                self.total_floors
            )));
        }
        if self.lift_count == 0 {
            return Err(LiftError::InvalidConfiguration(
                "fleet needs at least one lift".to_owned(),
            ));
        }
        if u32::try_from(self.lift_count).is_err() {
            return Err(LiftError::InvalidConfiguration(format!(
                "lift count {} does not fit a lift id",
                self.lift_count
            )));
        }
        if self.travel_ticks == 0 {
            return Err(LiftError::InvalidConfiguration(
                "travel duration must be at least one tick".to_owned(),
            ));
        }
        if self.travel_ticks > MAX_TRAVEL_TICKS {
            return Err(LiftError::InvalidConfiguration(format!(
                "travel duration of {} ticks exceeds the limit of {MAX_TRAVEL_TICKS}",
                self.travel_ticks
            )));
        }
        if self.tick_duration_ms == 0 {
            return Err(LiftError::InvalidConfiguration(
                "tick duration must be at least 1 ms".to_owned(),
            ));
        }
        if self.travel_ticks.checked_mul(self.tick_duration_ms as u64).is_none() {
            return Err(LiftError::InvalidConfiguration(format!(
                "travel duration of {} ticks at {} ms per tick overflows",
                self.travel_ticks, self.tick_duration_ms
            )));
        }
        Ok(())
    }

    /// `Ok` if `floor` lies in `[1, total_floors]`.
    pub fn check_floor(&self, floor: Floor) -> LiftResult<()> {
        if floor.0 == 0 || floor.0 > self.total_floors {
            return Err(LiftError::InvalidFloorRequest {
                floor,
                total_floors: self.total_floors,
            });
        }
        Ok(())
    }

    /// Every floor in the building, top floor first (panel order).
    pub fn floors_top_down(&self) -> impl Iterator<Item = Floor> {
        (1..=self.total_floors).rev().map(Floor)
    }

    /// Transit duration in milliseconds.
    #[inline]
    pub fn travel_ms(&self) -> u64 {
        self.travel_ticks.saturating_mul(self.tick_duration_ms as u64)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_ms)
    }
}
