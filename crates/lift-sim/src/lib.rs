//! `lift-sim` — fleet coordinator and tick loop for the lift dispatch
//! simulator.
//!
//! # Tick loop
//!
//! ```text
//! submit_request(floor):
//!   ① Validate  — floor in [1, total_floors], else InvalidFloorRequest.
//!   ② Dispatch  — DispatchPolicy::select_lift over the live fleet.
//!   ③ Enqueue   — append to the chosen lift's FIFO queue.
//!   ④ Start     — if that lift is idle, pop the head and depart; the
//!                 arrival is pushed into the WakeQueue at now + travel_ticks.
//!
//! step():
//!   ① Advance   — clock moves to the next tick.
//!   ② Wake      — drain lifts whose transit completes this tick,
//!                 ascending LiftId.
//!   ③ Arrive    — clear the transit (lift idle at its floor).
//!   ④ Chain     — re-read the live queue; depart again if non-empty.
//! ```
//!
//! # Modules
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`sim`]         | `Sim` — requests, snapshots, stepping, batch runs     |
//! | [`builder`]     | `SimBuilder`                                          |
//! | [`processor`]   | `QueueProcessor`, `LiftPhase` — per-lift state machine |
//! | [`wake_queue`]  | `WakeQueue` — tick → lifts arriving                   |
//! | [`observer`]    | `SimObserver`, `NoopObserver`                         |
//! | [`script`]      | `RequestScript`, CSV loader                           |
//! | [`traffic`]     | `RandomTraffic` — seeded hall-call generator          |
//! | [`realtime`]    | `FleetHandle`, `FleetClient` — wall-clock driver thread |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{FleetConfig, Floor};
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(FleetConfig::default()).build()?;
//! sim.submit_request(Floor(6))?;
//! sim.run_until_idle(100, &mut NoopObserver)?;
//! println!("{:?}", sim.current_fleet_state());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod processor;
pub mod realtime;
pub mod script;
pub mod sim;
pub mod traffic;
pub mod wake_queue;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use processor::{LiftPhase, QueueProcessor};
pub use realtime::{FleetClient, FleetHandle};
pub use script::{HallCall, MAX_SCRIPT_TICK, RequestScript, load_script_csv, load_script_reader};
pub use sim::{RunSummary, Sim};
pub use traffic::RandomTraffic;
pub use wake_queue::WakeQueue;
