//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `lift_snapshots.csv`
//! - `lift_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{LiftEventRow, LiftSnapshotRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("lift_snapshots.csv"))?;
        snapshots.write_record([
            "tick",
            "elapsed_ms",
            "lift",
            "current_floor",
            "direction",
            "is_moving",
            "request_queue",
        ])?;

        let mut events = Writer::from_path(dir.join("lift_events.csv"))?;
        events.write_record(["tick", "elapsed_ms", "event", "lift", "from_floor", "floor"])?;

        Ok(Self {
            snapshots,
            events,
            finished: false,
        })
    }
}

fn opt(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[LiftSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.elapsed_ms.to_string(),
                row.lift.to_string(),
                row.current_floor.to_string(),
                row.direction.to_owned(),
                (row.is_moving as u8).to_string(),
                row.request_queue.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_event(&mut self, row: &LiftEventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.tick.to_string(),
            row.elapsed_ms.to_string(),
            row.event.to_string(),
            opt(row.lift),
            opt(row.from_floor),
            row.floor.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
