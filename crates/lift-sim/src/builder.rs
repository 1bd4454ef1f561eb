//! Fluent builder for constructing a [`Sim`].

use log::info;

use lift_core::{FleetConfig, Floor};
use lift_dispatch::{DispatchPolicy, NearestIdlePolicy};
use lift_fleet::FleetBuilder;

use crate::{QueueProcessor, Sim, SimResult, WakeQueue};

/// Fluent builder for [`Sim<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                     |
/// |--------------------------|-----------------------------|
/// | `.policy(p)`             | [`NearestIdlePolicy`]       |
/// | `.initial_floors(v)`     | Every lift on the ground floor |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(FleetConfig::default()).build()?;
/// sim.submit_request(Floor(6))?;
/// sim.run_until_idle(100, &mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: DispatchPolicy> {
    config: FleetConfig,
    policy: P,
    floors: Option<Vec<Floor>>,
}

impl SimBuilder<NearestIdlePolicy> {
    pub fn new(config: FleetConfig) -> Self {
        Self {
            config,
            policy: NearestIdlePolicy,
            floors: None,
        }
    }
}

impl<P: DispatchPolicy> SimBuilder<P> {
    /// Replace the dispatch policy.
    pub fn policy<Q: DispatchPolicy>(self, policy: Q) -> SimBuilder<Q> {
        SimBuilder {
            config: self.config,
            policy,
            floors: self.floors,
        }
    }

    /// Park each lift at a given floor (must be length `lift_count`, every
    /// floor within the building).
    pub fn initial_floors(mut self, floors: Vec<Floor>) -> Self {
        self.floors = Some(floors);
        self
    }

    /// Validate the configuration, create the fleet, and return a
    /// ready-to-run [`Sim`] at tick 0.
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;

        let mut fleet = FleetBuilder::new(self.config.lift_count);
        if let Some(floors) = self.floors {
            for &floor in &floors {
                self.config.check_floor(floor)?;
            }
            fleet = fleet.initial_floors(floors);
        }
        let fleet = fleet.build()?;

        info!(
            "fleet of {} lift(s) over {} floors, {} ms transit, {} dispatch",
            self.config.lift_count,
            self.config.total_floors,
            self.config.travel_ms(),
            self.policy.name()
        );

        Ok(Sim {
            clock:      self.config.make_clock(),
            processor:  QueueProcessor::new(self.config.travel_ticks),
            config:     self.config,
            fleet,
            wake_queue: WakeQueue::new(),
            policy:     self.policy,
        })
    }
}
