//! `lift-output` — simulation output writers for the lift dispatch
//! simulator.
//!
//! | Backend | Files created                             |
//! |---------|-------------------------------------------|
//! | CSV     | `lift_snapshots.csv`, `lift_events.csv`   |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `lift_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, sim.config());
//! sim.run_script(&script, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{LiftEventKind, LiftEventRow, LiftSnapshotRow};
pub use writer::OutputWriter;
