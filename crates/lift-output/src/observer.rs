//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use log::warn;

use lift_core::{FleetConfig, Floor, LiftError, LiftId, SimClock, Tick};
use lift_fleet::{FleetSnapshot, LiftSnapshot, Transit};
use lift_sim::SimObserver;

use crate::row::{LiftEventKind, LiftEventRow, LiftSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes fleet snapshots and dispatch events to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    clock:      SimClock,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for the
    /// tick → milliseconds conversion.
    pub fn new(writer: W, config: &FleetConfig) -> Self {
        Self {
            writer,
            clock:      config.make_clock(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn event(
        &mut self,
        tick:  Tick,
        event: LiftEventKind,
        lift:  Option<LiftId>,
        from:  Option<Floor>,
        floor: Floor,
    ) {
        let row = LiftEventRow {
            tick:       tick.0,
            elapsed_ms: self.clock.ms_for_ticks(tick.0),
            event,
            lift:       lift.map(LiftId::number),
            from_floor: from.map(|f| f.0),
            floor:      floor.0,
        };
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("output writer failed, further errors suppressed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

fn snapshot_row(tick: Tick, elapsed_ms: u64, lift: &LiftSnapshot) -> LiftSnapshotRow {
    let queue: Vec<String> = lift.request_queue.iter().map(|f| f.0.to_string()).collect();
    LiftSnapshotRow {
        tick:          tick.0,
        elapsed_ms,
        lift:          lift.id.number(),
        current_floor: lift.current_floor.0,
        direction:     lift.direction.as_str(),
        is_moving:     lift.is_moving,
        request_queue: queue.join(" "),
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_request_assigned(&mut self, tick: Tick, lift: LiftId, floor: Floor) {
        self.event(tick, LiftEventKind::Assigned, Some(lift), None, floor);
    }

    fn on_request_rejected(&mut self, tick: Tick, floor: Floor, _error: &LiftError) {
        self.event(tick, LiftEventKind::Rejected, None, None, floor);
    }

    fn on_departure(&mut self, tick: Tick, lift: LiftId, transit: &Transit) {
        self.event(tick, LiftEventKind::Departed, Some(lift), Some(transit.from), transit.to);
    }

    fn on_arrival(&mut self, tick: Tick, lift: &LiftSnapshot) {
        self.event(tick, LiftEventKind::Arrived, Some(lift.id), None, lift.current_floor);
    }

    fn on_snapshot(&mut self, snapshot: &FleetSnapshot) {
        let elapsed_ms = self.clock.ms_for_ticks(snapshot.tick.0);
        let rows: Vec<LiftSnapshotRow> = snapshot
            .iter()
            .map(|lift| snapshot_row(snapshot.tick, elapsed_ms, lift))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
