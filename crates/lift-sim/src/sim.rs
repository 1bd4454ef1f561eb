//! The `Sim` struct — fleet coordinator and tick loop.

use log::{debug, info, trace, warn};

use lift_core::{FleetConfig, Floor, LiftError, LiftId, LiftResult, SimClock, Tick};
use lift_dispatch::DispatchPolicy;
use lift_fleet::{FleetSnapshot, FleetStore};

use crate::{NoopObserver, QueueProcessor, RandomTraffic, RequestScript, SimObserver, WakeQueue};

/// Counts from a batch run ([`Sim::run_script`], [`Sim::run_with_traffic`]).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Requests appended to some lift's queue.
    pub accepted: usize,
    /// Requests rejected as out of range.
    pub rejected: usize,
    /// Ticks advanced during the run.
    pub ticks:    u64,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The fleet coordinator.
///
/// `Sim<P>` owns every lift and is the only thing that mutates them.  It
/// handles two kinds of input:
///
/// 1. **Requests** ([`submit_request`](Self::submit_request)): validate the
///    floor, ask the [`DispatchPolicy`] for a lift, append to that lift's
///    queue, and start the lift if it was idle.
/// 2. **Ticks** ([`step`](Self::step)): advance the clock, complete every
///    transit due this tick (ascending `LiftId`), and chain each lift
///    straight into its next queued stop.
///
/// Both run to completion before returning, so
/// [`current_fleet_state`](Self::current_fleet_state) always sees settled
/// lifts.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: DispatchPolicy> {
    pub(crate) config:     FleetConfig,
    pub(crate) clock:      SimClock,
    pub(crate) fleet:      FleetStore,
    pub(crate) wake_queue: WakeQueue,
    pub(crate) processor:  QueueProcessor,
    pub(crate) policy:     P,
}

impl<P: DispatchPolicy> Sim<P> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    /// Read-only access to the live fleet.
    pub fn fleet(&self) -> &FleetStore {
        &self.fleet
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The earliest pending arrival, if any lift is moving.
    pub fn next_arrival(&self) -> Option<Tick> {
        self.wake_queue.next_tick()
    }

    /// `true` if no lift is moving and every queue is empty.
    pub fn is_idle(&self) -> bool {
        self.wake_queue.is_empty() && self.fleet.is_quiescent()
    }

    // ── Requests ──────────────────────────────────────────────────────────

    /// Submit a hall call for `floor`.
    ///
    /// Returns the lift the request was appended to.  An out-of-range floor
    /// is rejected with [`LiftError::InvalidFloorRequest`] and leaves the
    /// fleet untouched.  A fleet with no idle lift is not an error; the
    /// policy's fallback picks a lift.
    pub fn submit_request(&mut self, floor: Floor) -> LiftResult<LiftId> {
        self.submit_request_observed(floor, &mut NoopObserver)
    }

    /// Like [`submit_request`](Self::submit_request), reporting the
    /// assignment (and any departure it triggers) to `observer`.
    pub fn submit_request_observed<O: SimObserver>(
        &mut self,
        floor:    Floor,
        observer: &mut O,
    ) -> LiftResult<LiftId> {
        let now = self.clock.current_tick;

        if let Err(e) = self.config.check_floor(floor) {
            warn!("{now}: rejected request: {e}");
            observer.on_request_rejected(now, floor, &e);
            return Err(e);
        }

        let id = self.policy.select_lift(&self.fleet, floor)?;
        let lift = self.fleet.get_mut(id)?;
        lift.push_stop(floor);
        debug!(
            "{now}: floor {floor} → {id} ({} policy, queue depth {})",
            self.policy.name(),
            lift.queue().len()
        );
        observer.on_request_assigned(now, id, floor);

        // A lift already in flight picks the stop up when it arrives.
        if let Some(transit) = self.processor.depart(lift, now) {
            debug!("{now}: {id} departs {} → {} ({})", transit.from, transit.to, transit.direction);
            self.wake_queue.push(transit.arrives, id);
            observer.on_departure(now, id, &transit);
        }

        Ok(id)
    }

    /// Consistent, owned copy of every lift's state.
    pub fn current_fleet_state(&self) -> FleetSnapshot {
        self.fleet.snapshot(self.clock.current_tick, self.config.total_floors)
    }

    /// Change the building height.
    ///
    /// Only allowed while the fleet is at rest (nothing moving, nothing
    /// queued) and every lift is parked within the new range.
    pub fn set_total_floors(&mut self, total_floors: u32) -> LiftResult<()> {
        let candidate = FleetConfig { total_floors, ..self.config.clone() };
        candidate.validate()?;

        if !self.is_idle() {
            return Err(LiftError::InvalidConfiguration(
                "cannot change the floor count while requests are active".to_owned(),
            ));
        }
        if let Some(lift) = self.fleet.iter().find(|l| candidate.check_floor(l.current_floor()).is_err()) {
            return Err(LiftError::InvalidConfiguration(format!(
                "{} is parked at floor {}, above the new top floor {total_floors}",
                lift.id(),
                lift.current_floor()
            )));
        }

        info!("floor count changed {} → {total_floors}", self.config.total_floors);
        self.config = candidate;
        Ok(())
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance one tick and process every arrival due at the new tick.
    ///
    /// Returns the number of transits completed.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> LiftResult<usize> {
        let now = self.clock.advance();
        observer.on_tick_start(now);
        let arrivals = self.process_tick(now, observer)?;
        observer.on_tick_end(now, arrivals);

        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0 % interval == 0 {
            observer.on_snapshot(&self.current_fleet_state());
        }
        Ok(arrivals)
    }

    /// Run exactly `n` ticks from the current position.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> LiftResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Step until the fleet is at rest or `max_ticks` have passed.
    ///
    /// Returns the number of ticks advanced.
    pub fn run_until_idle<O: SimObserver>(&mut self, max_ticks: u64, observer: &mut O) -> LiftResult<u64> {
        let mut ticks = 0;
        while !self.wake_queue.is_empty() && ticks < max_ticks {
            self.step(observer)?;
            ticks += 1;
        }
        Ok(ticks)
    }

    /// Replay a hall-call script, then run until the fleet is at rest.
    ///
    /// Script ticks are offsets from the current tick.  Out-of-range floors
    /// are counted as rejected and skipped.  Calls
    /// [`SimObserver::on_sim_end`] when done.
    pub fn run_script<O: SimObserver>(
        &mut self,
        script:   &RequestScript,
        observer: &mut O,
    ) -> LiftResult<RunSummary> {
        let start = self.clock.current_tick;
        let mut summary = RunSummary::default();
        let mut calls = script.calls().iter().peekable();

        info!("replaying {} scripted calls from {start}", script.len());
        loop {
            let elapsed = self.clock.current_tick.since(start);
            while let Some(call) = calls.next_if(|c| c.tick.0 <= elapsed) {
                self.tally(call.floor, &mut summary, observer)?;
            }
            if calls.peek().is_none() && self.is_idle() {
                break;
            }
            self.step(observer)?;
            summary.ticks += 1;
        }

        observer.on_sim_end(self.clock.current_tick);
        Ok(summary)
    }

    /// Run `ticks` ticks of random hall calls (at most one per tick), then
    /// run until the fleet is at rest.  Calls [`SimObserver::on_sim_end`]
    /// when done.
    pub fn run_with_traffic<O: SimObserver>(
        &mut self,
        traffic:  &mut RandomTraffic,
        ticks:    u64,
        observer: &mut O,
    ) -> LiftResult<RunSummary> {
        let mut summary = RunSummary::default();

        info!("generating random traffic for {ticks} ticks from {}", self.clock.current_tick);
        for _ in 0..ticks {
            if let Some(floor) = traffic.next_call(self.config.total_floors) {
                self.tally(floor, &mut summary, observer)?;
            }
            self.step(observer)?;
            summary.ticks += 1;
        }
        summary.ticks += self.run_until_idle(u64::MAX, observer)?;

        observer.on_sim_end(self.clock.current_tick);
        Ok(summary)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Submit one batch-run request, counting range rejections instead of
    /// failing the run.
    fn tally<O: SimObserver>(
        &mut self,
        floor:    Floor,
        summary:  &mut RunSummary,
        observer: &mut O,
    ) -> LiftResult<()> {
        match self.submit_request_observed(floor, observer) {
            Ok(_) => summary.accepted += 1,
            Err(LiftError::InvalidFloorRequest { .. }) => summary.rejected += 1,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> LiftResult<usize> {
        let Some(mut woken) = self.wake_queue.drain_tick(now) else {
            return Ok(0);
        };
        // Ascending LiftId keeps same-tick arrivals deterministic.
        woken.sort_unstable();
        woken.dedup();
        trace!("{now}: waking {} lift(s)", woken.len());

        let mut arrivals = 0;
        for id in woken {
            let lift = self.fleet.get_mut(id)?;

            let Some(done) = self.processor.arrive(lift, now) else {
                trace!("{now}: {id} woke with no transit due");
                continue;
            };
            arrivals += 1;
            debug!("{now}: {id} arrived at floor {}", done.to);
            observer.on_arrival(now, &lift.snapshot());

            // Read the live queue: stops appended mid-transit are served here.
            if let Some(next) = self.processor.depart(lift, now) {
                debug!("{now}: {id} departs {} → {} ({})", next.from, next.to, next.direction);
                self.wake_queue.push(next.arrives, id);
                observer.on_departure(now, id, &next);
            }
        }
        Ok(arrivals)
    }
}
