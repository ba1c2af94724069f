//! Run a ride-dispatch event file and print the summary report.
//!
//! ```text
//! dispatch data/events.txt
//! dispatch data/events.txt --until 20 --output-dir output/run1
//! RUST_LOG=rd_event=debug dispatch data/events.txt --json
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rd_core::Tick;
use rd_event::load_events_path;
use rd_monitor::Monitor;
use rd_output::{CsvWriter, SimOutputObserver};
use rd_sim::{NoopObserver, Sim, SimBuilder, SimConfig};

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "dispatch",
    about = "Discrete-event simulation of a ride dispatch service"
)]
struct Cli {
    /// Event file: one `<tick> DriverRequest|PassengerRequest ...` per line
    events: PathBuf,

    /// Stop after the last event at or before this tick
    #[arg(long)]
    until: Option<u64>,

    /// Write event_trace.csv and report.csv into this directory
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Print the summary as JSON instead of a table
    #[arg(long)]
    json: bool,
}

// ── Summary ───────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Summary<'a> {
    config:                        &'a SimConfig,
    final_tick:                    Tick,
    processed_events:              u64,
    pending_events:                usize,
    average_passenger_wait_time:   Option<f64>,
    average_driver_total_distance: Option<f64>,
    average_driver_trip_distance:  Option<f64>,
}

impl<'a> Summary<'a> {
    fn new(sim: &'a Sim) -> Self {
        let monitor: &Monitor = &sim.monitor;
        Self {
            config:                        &sim.config,
            final_tick:                    sim.now,
            processed_events:              sim.processed(),
            pending_events:                sim.queue.len(),
            average_passenger_wait_time:   monitor.average_wait_time().ok(),
            average_driver_total_distance: monitor.average_total_distance().ok(),
            average_driver_trip_distance:  monitor.average_trip_distance().ok(),
        }
    }

    fn print_table(&self) {
        println!(
            "Final tick: {}  |  Events: {} run, {} pending",
            self.final_tick, self.processed_events, self.pending_events
        );
        println!();
        println!("{:<32} {:>10}", "Statistic", "Value");
        println!("{}", "-".repeat(43));
        let rows = [
            ("average passenger wait time", self.average_passenger_wait_time),
            ("average driver total distance", self.average_driver_total_distance),
            ("average driver trip distance", self.average_driver_trip_distance),
        ];
        for (label, value) in rows {
            let cell = value.map_or_else(|| "n/a".to_owned(), |v| format!("{v:.2}"));
            println!("{label:<32} {cell:>10}");
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // 1. Load the scenario.
    let scenario = load_events_path(&cli.events)
        .with_context(|| format!("loading {}", cli.events.display()))?;
    info!(
        drivers = scenario.fleet.driver_count(),
        passengers = scenario.fleet.passenger_count(),
        events = scenario.events.len(),
        "loaded {}",
        cli.events.display()
    );

    // 2. Build sim.
    let config = SimConfig { end_tick: cli.until.map(Tick) };
    let mut sim = SimBuilder::new(scenario).config(config).build()?;

    // 3. Run, with or without file output.
    let t0 = Instant::now();
    match &cli.output_dir {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("creating output in {}", dir.display()))?;
            let mut obs = SimOutputObserver::new(writer);
            sim.run(&mut obs)?;
            if let Some(e) = obs.take_error() {
                return Err(e).context("writing simulation output");
            }
            info!(dir = %dir.display(), "wrote event_trace.csv and report.csv");
        }
        None => sim.run(&mut NoopObserver)?,
    }
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "run complete");

    // 4. Summary.
    let summary = Summary::new(&sim);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        summary.print_table();
    }

    Ok(())
}
