//! `lift-dispatch` — choosing which lift serves a floor request.
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`policy`]  | `DispatchPolicy` trait                                |
//! | [`nearest`] | `NearestIdlePolicy` — the default policy              |
//!
//! Policies are pure: they read the fleet and return a `LiftId`.  Appending
//! the request and starting the lift is the coordinator's job (`lift-sim`).

pub mod nearest;
pub mod policy;


pub use nearest::NearestIdlePolicy;
pub use policy::DispatchPolicy;
