//! The `DispatchPolicy` trait.

use lift_core::{Floor, LiftId, LiftResult};
use lift_fleet::FleetStore;

/// Selects the lift that should receive a new floor request.
///
/// Implementations must be deterministic for a given fleet state: the same
/// fleet and target always yield the same lift.  The only error they may
/// return is for an empty fleet, which `lift-sim` rules out at construction.
///
/// The trait bound `Send + Sync + 'static` lets the realtime driver move the
/// simulator (and its policy) onto its own thread.
pub trait DispatchPolicy: Send + Sync + 'static {
    fn select_lift(&self, fleet: &FleetStore, target: Floor) -> LiftResult<LiftId>;

    /// Short name for log lines.
    fn name(&self) -> &'static str {
        "custom"
    }
}
