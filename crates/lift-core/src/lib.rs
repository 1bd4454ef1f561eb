//! `lift-core` — foundational types for the lift dispatch simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and only `rand` and `thiserror` externally, plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `LiftId`                                              |
//! | [`floor`]       | `Floor` (1-indexed, 1 = ground)                       |
//! | [`direction`]   | `Direction` (`Up`, `Down`, `Idle`)                    |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `FleetConfig`, `MIN_FLOORS`, `MAX_TRAVEL_TICKS`       |
//! | [`rng`]         | `SimRng` (seeded, reproducible)                       |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FleetConfig, MAX_TRAVEL_TICKS, MIN_FLOORS};
pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use floor::Floor;
pub use ids::LiftId;
pub use rng::SimRng;
pub use time::{SimClock, Tick};
