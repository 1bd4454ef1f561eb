//! lobby — drive the lift dispatch simulator from the command line.
//!
//! Batch mode replays a CSV hall-call script (`--script`) or seeded random
//! traffic, optionally writing `lift_snapshots.csv` / `lift_events.csv`.
//! `--realtime` instead runs the wall-clock driver and feeds it the floors
//! given with `--requests`.  Either way the final fleet state is printed as
//! JSON.
//!
//! ```text
//! RUST_LOG=debug cargo run -p lobby -- --floors 10 --lifts 3 --script calls.csv --output out
//! cargo run -p lobby -- --realtime --tick-ms 100 --travel-ms 900 --requests 6,2,9
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;

use lift_core::{FleetConfig, Floor};
use lift_dispatch::NearestIdlePolicy;
use lift_fleet::FleetSnapshot;
use lift_output::{CsvWriter, SimOutputObserver};
use lift_sim::{
    NoopObserver, RandomTraffic, RunSummary, Sim, SimBuilder, SimObserver, load_script_csv,
};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON fleet configuration; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Floors in the building (at least 5)
    #[arg(long)]
    floors: Option<u32>,

    /// Lifts in the fleet
    #[arg(long)]
    lifts: Option<usize>,

    /// Milliseconds per simulation tick
    #[arg(long)]
    tick_ms: Option<u32>,

    /// Transit time in milliseconds, rounded up to whole ticks
    #[arg(long)]
    travel_ms: Option<u64>,

    /// CSV hall-call script (`tick,floor`)
    #[arg(long, conflicts_with = "realtime")]
    script: Option<PathBuf>,

    /// Chance of a random hall call per tick when no script is given
    #[arg(long, default_value_t = 0.3)]
    call_probability: f64,

    /// Seed for random traffic
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Ticks of random traffic before the fleet is left to settle
    #[arg(long, default_value_t = 120)]
    ticks: u64,

    /// Directory for CSV output (batch mode only)
    #[arg(long, conflicts_with = "realtime")]
    output: Option<PathBuf>,

    /// Run the wall-clock driver instead of a batch simulation
    #[arg(long)]
    realtime: bool,

    /// Floors submitted to the realtime driver, in order
    #[arg(long, value_delimiter = ',')]
    requests: Vec<u32>,
}

impl Args {
    fn fleet_config(&self) -> Result<FleetConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening config {}", path.display()))?;
                serde_json::from_reader(file)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => FleetConfig::default(),
        };

        if let Some(floors) = self.floors {
            config.total_floors = floors;
        }
        if let Some(lifts) = self.lifts {
            config.lift_count = lifts;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_duration_ms = tick_ms;
        }
        if let Some(travel_ms) = self.travel_ms {
            config.travel_ticks = config.make_clock().ticks_for_ms(travel_ms);
        }
        Ok(config)
    }
}

// ── Batch ─────────────────────────────────────────────────────────────────────

fn run_batch<O: SimObserver>(
    sim:      &mut Sim<NearestIdlePolicy>,
    args:     &Args,
    observer: &mut O,
) -> Result<RunSummary> {
    let summary = match &args.script {
        Some(path) => {
            let script = load_script_csv(path)
                .with_context(|| format!("loading script {}", path.display()))?;
            info!("loaded {} hall calls from {}", script.len(), path.display());
            sim.run_script(&script, observer)?
        }
        None => {
            let mut traffic = RandomTraffic::new(args.seed, args.call_probability)?;
            sim.run_with_traffic(&mut traffic, args.ticks, observer)?
        }
    };
    Ok(summary)
}

fn batch(mut sim: Sim<NearestIdlePolicy>, args: &Args) -> Result<FleetSnapshot> {
    let t0 = Instant::now();
    let summary = match &args.output {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let writer = CsvWriter::new(dir)?;
            let mut obs = SimOutputObserver::new(writer, sim.config());
            let summary = run_batch(&mut sim, args, &mut obs)?;
            if let Some(e) = obs.take_error() {
                eprintln!("output error: {e}");
            }
            summary
        }
        None => run_batch(&mut sim, args, &mut NoopObserver)?,
    };

    println!("Simulation complete in {:.3} s", t0.elapsed().as_secs_f64());
    println!(
        "  {} accepted, {} rejected, {} ticks ({})",
        summary.accepted,
        summary.rejected,
        summary.ticks,
        sim.clock()
    );
    Ok(sim.current_fleet_state())
}

// ── Realtime ──────────────────────────────────────────────────────────────────

fn realtime(sim: Sim<NearestIdlePolicy>, args: &Args) -> Result<FleetSnapshot> {
    let tick = Duration::from_millis(sim.config().tick_duration_ms as u64);
    let handle = sim.spawn_realtime(NoopObserver)?;

    for &floor in &args.requests {
        match handle.submit_floor_request(Floor(floor)) {
            Ok(lift) => println!("floor {} → {lift}", Floor(floor).label()),
            Err(e) => println!("floor {floor} rejected: {e}"),
        }
        thread::sleep(tick);
    }

    let mut state = handle.current_fleet_state()?;
    while !state.is_idle() {
        thread::sleep(tick);
        state = handle.current_fleet_state()?;
    }

    let (sim, _) = handle.shutdown()?;
    println!("Driver stopped at {}", sim.clock());
    Ok(state)
}

// ── Panel ─────────────────────────────────────────────────────────────────────

fn print_panel(config: &FleetConfig, state: &FleetSnapshot) {
    println!("{:<6} {:<6} {}", "Floor", "Call", "Lifts");
    println!("{}", "-".repeat(24));
    for floor in config.floors_top_down() {
        let here: Vec<String> = state
            .iter()
            .filter(|l| l.current_floor == floor)
            .map(|l| l.id.number().to_string())
            .collect();
        println!(
            "{:<6} {:<6} {}",
            floor.label(),
            if state.is_floor_active(floor) { "*" } else { "" },
            here.join(" ")
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.fleet_config()?;
    if args.realtime && args.requests.is_empty() {
        bail!("--realtime needs at least one floor in --requests");
    }

    println!("=== lobby — lift dispatch simulator ===");
    println!(
        "Floors: {}  |  Lifts: {}  |  Transit: {} ms  |  Tick: {} ms",
        config.total_floors,
        config.lift_count,
        config.travel_ms(),
        config.tick_duration_ms
    );
    println!();

    let sim = SimBuilder::new(config.clone()).build()?;
    let state = if args.realtime {
        realtime(sim, &args)?
    } else {
        batch(sim, &args)?
    };

    println!();
    print_panel(&config, &state);
    println!();
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
