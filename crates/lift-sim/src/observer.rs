//! Simulation observer trait for rendering, logging, and data collection.

use lift_core::{Floor, LiftError, LiftId, Tick};
use lift_fleet::{FleetSnapshot, LiftSnapshot, Transit};

/// Callbacks invoked by [`Sim`][crate::Sim] as requests arrive and lifts
/// move.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Every argument is an owned copy or a
/// shared borrow of one; observers can never reach live fleet state.
///
/// # Example — departure printer
///
/// ```rust,ignore
/// struct Departures;
///
/// impl SimObserver for Departures {
///     fn on_departure(&mut self, tick: Tick, lift: LiftId, transit: &Transit) {
///         println!("{tick}: {lift} {} → {}", transit.from, transit.to);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each tick, before any arrivals.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A request was accepted and appended to `lift`'s queue.
    fn on_request_assigned(&mut self, _tick: Tick, _lift: LiftId, _floor: Floor) {}

    /// A request was rejected at the boundary.  Fleet state is unchanged.
    fn on_request_rejected(&mut self, _tick: Tick, _floor: Floor, _error: &LiftError) {}

    /// `lift` started a transit.
    fn on_departure(&mut self, _tick: Tick, _lift: LiftId, _transit: &Transit) {}

    /// A lift finished its transit.
    ///
    /// `lift` shows the idle state at the arrival floor, before any queued
    /// stop is popped; a chained departure follows as `on_departure`.
    fn on_arrival(&mut self, _tick: Tick, _lift: &LiftSnapshot) {}

    /// Called at the end of each tick.  `arrivals` is the number of transits
    /// completed this tick.
    fn on_tick_end(&mut self, _tick: Tick, _arrivals: usize) {}

    /// Called every `config.output_interval_ticks` ticks with a consistent
    /// copy of the fleet.
    fn on_snapshot(&mut self, _snapshot: &FleetSnapshot) {}

    /// Called once when a run finishes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
