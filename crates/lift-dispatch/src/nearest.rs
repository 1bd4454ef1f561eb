//! Nearest-idle dispatch with first-lift fallback.

use lift_core::{Floor, LiftError, LiftId, LiftResult};
use lift_fleet::{FleetStore, Lift};

use crate::DispatchPolicy;

/// Sends the request to the closest lift that is idle **and** has an empty
/// queue; ties go to the earlier lift in fleet order.  When no lift
/// qualifies, the first lift in the fleet takes the request, however deep
/// its queue or far its position.
///
/// The fallback never weighs queue depth, so a busy fleet piles work onto
/// lift 1.  Plug in another [`DispatchPolicy`] to spread that load.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestIdlePolicy;

impl DispatchPolicy for NearestIdlePolicy {
    fn select_lift(&self, fleet: &FleetStore, target: Floor) -> LiftResult<LiftId> {
        let first = fleet.first().ok_or_else(|| {
            LiftError::InvalidConfiguration("cannot dispatch with an empty fleet".to_owned())
        })?;

        // `min_by_key` returns the first of several equal minima, which is
        // the fleet-order tie-break.
        let nearest = fleet
            .iter()
            .filter(|lift| lift.is_available())
            .min_by_key(|lift| target.distance(lift.current_floor()));

        Ok(nearest.map_or(first.id(), Lift::id))
    }

    fn name(&self) -> &'static str {
        "nearest-idle"
    }
}
