//! Scripted hall calls and the CSV loader.
//!
//! # CSV format
//!
//! One row per hall call.  `tick` is an offset from the tick at which the
//! script starts playing; rows need not be sorted.
//!
//! ```csv
//! tick,floor
//! 0,3
//! 0,5
//! 4,8
//! 12,1
//! ```
//!
//! Calls sharing a tick are submitted in file order.  Ticks above
//! [`MAX_SCRIPT_TICK`] are rejected as a parse error.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Floor, Tick};

use crate::{SimError, SimResult};

/// Largest tick offset a CSV script may use.
pub const MAX_SCRIPT_TICK: u64 = u32::MAX as u64;

#[derive(Deserialize)]
struct HallCallRecord {
    tick:  u64,
    floor: u32,
}

/// One scripted request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HallCall {
    pub tick:  Tick,
    pub floor: Floor,
}

/// An ordered list of hall calls, replayed by
/// [`Sim::run_script`][crate::Sim::run_script].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestScript {
    calls: Vec<HallCall>,
}

impl RequestScript {
    /// Build from calls in any order; the sort is stable so same-tick calls
    /// keep their relative order.
    pub fn new(mut calls: Vec<HallCall>) -> Self {
        calls.sort_by_key(|c| c.tick);
        Self { calls }
    }

    /// Calls sorted by tick.
    pub fn calls(&self) -> &[HallCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

/// Load a [`RequestScript`] from a CSV file.
pub fn load_script_csv(path: &Path) -> SimResult<RequestScript> {
    let file = std::fs::File::open(path)?;
    load_script_reader(file)
}

/// Like [`load_script_csv`] but accepts any `Read` source.
pub fn load_script_reader<R: Read>(reader: R) -> SimResult<RequestScript> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut calls = Vec::new();

    for result in csv_reader.deserialize::<HallCallRecord>() {
        let row = result.map_err(|e| SimError::Parse(e.to_string()))?;
        if row.tick > MAX_SCRIPT_TICK {
            return Err(SimError::Parse(format!(
                "tick {} exceeds the limit of {MAX_SCRIPT_TICK}",
                row.tick
            )));
        }
        calls.push(HallCall {
            tick:  Tick(row.tick),
            floor: Floor(row.floor),
        });
    }

    Ok(RequestScript::new(calls))
}
