//! The `OutputWriter` trait implemented by backend writers.

use crate::{LiftEventRow, LiftSnapshotRow, OutputResult};

/// Sink for snapshot and event rows.
///
/// [`SimOutputObserver`][crate::SimOutputObserver] calls these from
/// observer callbacks, which cannot fail; it keeps the first error for
/// [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one row per lift for a fleet snapshot.
    fn write_snapshots(&mut self, rows: &[LiftSnapshotRow]) -> OutputResult<()>;

    /// Write one dispatch event.
    fn write_event(&mut self, row: &LiftEventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
