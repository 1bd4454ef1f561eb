//! `lift-fleet` — per-lift state and the fleet that owns it.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`lift`]      | `Lift` (mutable per-lift state), `Transit`               |
//! | [`store`]     | `FleetStore` — fixed-size, `LiftId`-indexed collection   |
//! | [`builder`]   | `FleetBuilder`                                           |
//! | [`snapshot`]  | `LiftSnapshot`, `FleetSnapshot` — owned, read-only copies |
//!
//! # State model
//!
//! A lift is either **idle** (`transit == None`) or **moving** (one
//! `Transit` in flight).  Direction is derived from the transit, so
//! "`direction` is non-idle iff the lift is moving" holds by construction
//! rather than by discipline.  The floor is updated when the transit
//! starts; arrival only clears the transit.

pub mod builder;
pub mod lift;
pub mod snapshot;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::FleetBuilder;
pub use lift::{Lift, Transit};
pub use snapshot::{FleetSnapshot, LiftSnapshot};
pub use store::FleetStore;
