//! Seeded random hall-call generator.

use lift_core::{Floor, LiftError, LiftResult, SimRng};

/// Produces at most one hall call per tick, uniformly over the building.
///
/// The same seed and probability always produce the same call stream.
pub struct RandomTraffic {
    rng:              SimRng,
    call_probability: f64,
}

impl RandomTraffic {
    /// `call_probability` is the chance of a call on any given tick.
    pub fn new(seed: u64, call_probability: f64) -> LiftResult<Self> {
        if !(0.0..=1.0).contains(&call_probability) {
            return Err(LiftError::InvalidConfiguration(format!(
                "call probability must lie in [0, 1], got {call_probability}"
            )));
        }
        Ok(Self {
            rng: SimRng::new(seed),
            call_probability,
        })
    }

    /// Roll for this tick's call.
    pub fn next_call(&mut self, total_floors: u32) -> Option<Floor> {
        if total_floors == 0 || !self.rng.gen_bool(self.call_probability) {
            return None;
        }
        Some(Floor(self.rng.gen_range(1..=total_floors)))
    }
}
