//! Realtime driver: a `Sim` paced against the wall clock on its own thread.
//!
//! The driver thread owns the [`Sim`] and its observer exclusively (moved in
//! via `thread::spawn`).  Nothing else can touch the fleet, so there are no
//! locks: requests and snapshot reads arrive over a bounded crossbeam
//! channel and each carries its own reply channel.  The thread advances one
//! tick every `config.tick_duration_ms` and serves commands in between, so
//! every reply reflects a fully settled fleet.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{self as cbc, Receiver, Sender};
use log::{error, info};

use lift_core::{Floor, LiftId, LiftResult};
use lift_dispatch::DispatchPolicy;
use lift_fleet::FleetSnapshot;

use crate::{Sim, SimError, SimObserver, SimResult};

/// Commands queued ahead of the driver before senders block.
const COMMAND_CAPACITY: usize = 64;

enum Command {
    Submit {
        floor: Floor,
        reply: Sender<LiftResult<LiftId>>,
    },
    Snapshot {
        reply: Sender<FleetSnapshot>,
    },
    SetTotalFloors {
        total_floors: u32,
        reply:        Sender<LiftResult<()>>,
    },
    Shutdown,
}

// ── FleetClient ───────────────────────────────────────────────────────────────

/// Cloneable request/read handle to a running driver.
///
/// Hand one to each producer (UI thread, input poller, …).  Every method
/// returns [`SimError::DriverStopped`] once the driver has exited.
#[derive(Clone)]
pub struct FleetClient {
    commands: Sender<Command>,
}

impl FleetClient {
    /// Submit a hall call.  Validation errors come back as
    /// [`SimError::Lift`].
    pub fn submit_floor_request(&self, floor: Floor) -> SimResult<LiftId> {
        let (reply, rx) = cbc::bounded(1);
        self.send(Command::Submit { floor, reply })?;
        let result = rx.recv().map_err(|_| SimError::DriverStopped)?;
        Ok(result?)
    }

    /// Snapshot of the fleet as of the driver's current tick.
    pub fn current_fleet_state(&self) -> SimResult<FleetSnapshot> {
        let (reply, rx) = cbc::bounded(1);
        self.send(Command::Snapshot { reply })?;
        rx.recv().map_err(|_| SimError::DriverStopped)
    }

    /// See [`Sim::set_total_floors`].
    pub fn set_total_floors(&self, total_floors: u32) -> SimResult<()> {
        let (reply, rx) = cbc::bounded(1);
        self.send(Command::SetTotalFloors { total_floors, reply })?;
        let result = rx.recv().map_err(|_| SimError::DriverStopped)?;
        Ok(result?)
    }

    fn send(&self, command: Command) -> SimResult<()> {
        self.commands.send(command).map_err(|_| SimError::DriverStopped)
    }
}

// ── FleetHandle ───────────────────────────────────────────────────────────────

/// Owner handle for a running driver.
///
/// Dereferences to [`FleetClient`].  [`shutdown`](Self::shutdown) stops the
/// thread and hands back the `Sim` and observer; dropping the handle stops
/// the thread and discards them.
pub struct FleetHandle<P: DispatchPolicy, O: SimObserver + Send + 'static> {
    client: FleetClient,
    thread: Option<JoinHandle<(Sim<P>, O)>>,
}

impl<P: DispatchPolicy, O: SimObserver + Send + 'static> FleetHandle<P, O> {
    /// A cloneable client for other threads.
    pub fn client(&self) -> FleetClient {
        self.client.clone()
    }

    /// Stop the driver and return the simulation and observer.
    pub fn shutdown(mut self) -> SimResult<(Sim<P>, O)> {
        // The driver may already have exited; joining is what matters.
        let _ = self.client.commands.send(Command::Shutdown);
        let thread = self.thread.take().ok_or(SimError::DriverStopped)?;
        thread.join().map_err(|_| SimError::DriverPanicked)
    }
}

impl<P: DispatchPolicy, O: SimObserver + Send + 'static> std::ops::Deref for FleetHandle<P, O> {
    type Target = FleetClient;

    fn deref(&self) -> &FleetClient {
        &self.client
    }
}

impl<P: DispatchPolicy, O: SimObserver + Send + 'static> Drop for FleetHandle<P, O> {
    fn drop(&mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = self.client.commands.send(Command::Shutdown);
            let _ = thread.join();
        }
    }
}

// ── Driver ────────────────────────────────────────────────────────────────────

impl<P: DispatchPolicy> Sim<P> {
    /// Move the simulation onto a driver thread ticking in real time.
    pub fn spawn_realtime<O>(self, observer: O) -> SimResult<FleetHandle<P, O>>
    where
        O: SimObserver + Send + 'static,
    {
        let (commands, rx) = cbc::bounded(COMMAND_CAPACITY);
        let interval = Duration::from_millis(self.config.tick_duration_ms as u64);

        let thread = thread::Builder::new()
            .name("lift-driver".to_owned())
            .spawn(move || run_driver(self, observer, rx, interval))?;

        info!("realtime driver started ({} ms per tick)", interval.as_millis());
        Ok(FleetHandle {
            client: FleetClient { commands },
            thread: Some(thread),
        })
    }
}

fn run_driver<P: DispatchPolicy, O: SimObserver>(
    mut sim:      Sim<P>,
    mut observer: O,
    commands:     Receiver<Command>,
    interval:     Duration,
) -> (Sim<P>, O) {
    let ticker = cbc::tick(interval);

    'driver: loop {
        cbc::select! {
            recv(commands) -> msg => match msg {
                Ok(Command::Submit { floor, reply }) => {
                    let _ = reply.send(sim.submit_request_observed(floor, &mut observer));
                }
                Ok(Command::Snapshot { reply }) => {
                    let _ = reply.send(sim.current_fleet_state());
                }
                Ok(Command::SetTotalFloors { total_floors, reply }) => {
                    let _ = reply.send(sim.set_total_floors(total_floors));
                }
                // Shutdown, or every sender dropped.
                Ok(Command::Shutdown) | Err(_) => break 'driver,
            },
            recv(ticker) -> _ => {
                if let Err(e) = sim.step(&mut observer) {
                    error!("realtime driver stopping at {}: {e}", sim.now());
                    break 'driver;
                }
            }
        }
    }

    observer.on_sim_end(sim.now());
    info!("realtime driver stopped at {}", sim.clock());
    (sim, observer)
}
