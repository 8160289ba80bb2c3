//! lift-compare: run one arrival roster through an elevator bank at several
//! floor-traversal speeds and report how much faster elevators cut average
//! wait and travel time.
//!
//! ```text
//! lift-compare --arrivals arrivals.csv --speeds 10,5 --output output/compare
//! RUST_LOG=debug lift-compare --passengers 50 --floors 12   # per-event trace
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{info, warn};

use lift_core::{BankConfig, SimClock, SimRng, Tick};
use lift_output::{CsvWriter, OutputError, SimOutputObserver};
use lift_roster::{ArrivalRecord, SyntheticRoster, load_arrivals_csv};
use lift_sim::{PassengerStore, SimObserver, SweepRun, TickSummary, run_sweep_with};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "lift-compare")]
#[command(about = "Compare an elevator bank at different floor-traversal speeds")]
struct Cli {
    /// Arrival CSV (`Start Time(s),Start Floor,End Floor`).  Without it a
    /// seeded synthetic roster is generated.
    #[arg(long)]
    arrivals: Option<PathBuf>,

    /// JSON file of bank settings; the flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    floors: Option<u16>,

    #[arg(long)]
    elevators: Option<u16>,

    #[arg(long)]
    capacity: Option<usize>,

    /// Dwell ticks after each stop
    #[arg(long)]
    dwell: Option<u32>,

    #[arg(long)]
    stall_limit: Option<u64>,

    /// Ticks per floor for each run; the first one is the baseline
    #[arg(long, value_delimiter = ',', default_value = "10,5")]
    speeds: Vec<u32>,

    /// Synthetic roster: number of passengers
    #[arg(long, default_value = "500")]
    passengers: usize,

    /// Synthetic roster: start times fall in 0..horizon ticks
    #[arg(long, default_value = "3600")]
    horizon: u64,

    /// Synthetic roster: share of trips starting at the lobby
    #[arg(long, default_value = "0.3")]
    lobby_share: f64,

    #[arg(long, default_value = "42")]
    seed: u64,

    /// Write trips.csv and tick_summaries.csv for each run under DIR/tpf_<n>/
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Ticks between rows of tick_summaries.csv
    #[arg(long, default_value = "60")]
    summary_interval: u64,
}

// ── Per-run observer ──────────────────────────────────────────────────────────

/// Tracks the peak queue length and forwards to an optional CSV observer.
struct RunObserver {
    output:       Option<SimOutputObserver<CsvWriter>>,
    setup_error:  Option<OutputError>,
    peak_waiting: usize,
}

impl RunObserver {
    fn new(root: Option<&Path>, ticks_per_floor: u32, summary_interval: u64) -> Self {
        let mut obs = Self { output: None, setup_error: None, peak_waiting: 0 };
        let Some(root) = root else { return obs };

        let dir = root.join(format!("tpf_{ticks_per_floor}"));
        let writer = std::fs::create_dir_all(&dir)
            .map_err(OutputError::from)
            .and_then(|()| CsvWriter::new(&dir));
        match writer {
            Ok(writer) => obs.output = Some(SimOutputObserver::new(writer, summary_interval)),
            Err(e) => obs.setup_error = Some(e),
        }
        obs
    }

    fn take_error(&mut self) -> Option<OutputError> {
        self.setup_error.take().or_else(|| self.output.as_mut()?.take_error())
    }
}

impl SimObserver for RunObserver {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.peak_waiting = self.peak_waiting.max(summary.waiting);
        if let Some(out) = &mut self.output {
            out.on_tick_end(tick, summary);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, passengers: &PassengerStore) {
        if let Some(out) = &mut self.output {
            out.on_sim_end(final_tick, passengers);
        }
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(cli: &Cli) -> Result<BankConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => BankConfig::default(),
    };

    if let Some(n) = cli.floors {
        config = config.with_floors(n);
    }
    if let Some(n) = cli.elevators {
        config = config.with_elevators(n);
    }
    if let Some(n) = cli.capacity {
        config = config.with_capacity(n);
    }
    if let Some(n) = cli.dwell {
        config = config.with_dwell_ticks(n);
    }
    if let Some(n) = cli.stall_limit {
        config = config.with_stall_limit(n);
    }

    config.validate()?;
    Ok(config)
}

fn load_roster(cli: &Cli, config: &BankConfig) -> Result<Vec<ArrivalRecord>> {
    match &cli.arrivals {
        Some(path) => {
            let loaded = load_arrivals_csv(path, config.floors)
                .with_context(|| format!("loading arrivals from {}", path.display()))?;
            if loaded.skipped > 0 {
                warn!("{}: skipped {} malformed or out-of-range rows", path.display(), loaded.skipped);
            }
            info!("loaded {} arrivals from {}", loaded.records.len(), path.display());
            Ok(loaded.records)
        }
        None => {
            let roster = SyntheticRoster {
                passengers:    cli.passengers,
                horizon_ticks: cli.horizon,
                floors:        config.floors,
                lobby_share:   cli.lobby_share.clamp(0.0, 1.0),
            };
            info!(
                "generating {} synthetic arrivals over {} ticks (seed {})",
                roster.passengers, roster.horizon_ticks, cli.seed
            );
            Ok(roster.generate(&mut SimRng::new(cli.seed)))
        }
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

fn print_report(runs: &[(SweepRun, RunObserver)]) {
    println!(
        "{:<12} {:>12} {:>10} {:>11} {:>11} {:>10}",
        "ticks/floor", "completed", "avg wait", "avg travel", "peak queue", "sim time"
    );
    println!("{}", "-".repeat(71));
    for (run, obs) in runs {
        let (h, m, s) = SimClock { current_tick: run.final_tick }.elapsed_hms();
        println!(
            "{:<12} {:>12} {:>10.2} {:>11.2} {:>11} {:>4}:{m:02}:{s:02}{}",
            run.ticks_per_floor,
            format!("{}/{}", run.stats.completed, run.stats.total),
            run.stats.avg_wait,
            run.stats.avg_travel,
            obs.peak_waiting,
            h,
            if run.stalled { "  STALLED" } else { "" },
        );
    }

    let Some(((baseline, _), rest)) = runs.split_first() else { return };
    for (run, _) in rest {
        let (wait, travel) = run.reduction_vs(baseline);
        println!();
        println!(
            "{} vs {} ticks/floor:",
            run.ticks_per_floor, baseline.ticks_per_floor
        );
        println!("  % reduction in average wait time:   {wait:.2}%");
        println!("  % reduction in average travel time: {travel:.2}%");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.speeds.is_empty() {
        bail!("--speeds needs at least one value");
    }

    let config = load_config(&cli)?;
    let arrivals = load_roster(&cli, &config)?;

    println!("=== lift-compare: elevator bank ===");
    println!(
        "Floors: {}  |  Elevators: {}  |  Capacity: {}  |  Dwell: {} ticks",
        config.floors, config.elevators, config.capacity, config.dwell_ticks
    );
    println!("Passengers: {}  |  Speeds: {:?} ticks/floor", arrivals.len(), cli.speeds);
    println!();

    let t0 = Instant::now();
    let mut runs = run_sweep_with(&config, &cli.speeds, &arrivals, |tpf| {
        RunObserver::new(cli.output.as_deref(), tpf, cli.summary_interval)
    })?;
    let elapsed = t0.elapsed();

    for (run, obs) in &mut runs {
        if let Some(e) = obs.take_error() {
            eprintln!("output error ({} ticks/floor): {e}", run.ticks_per_floor);
        }
    }

    print_report(&runs);
    println!();
    println!("Simulated {} configuration(s) in {:.3} s", runs.len(), elapsed.as_secs_f64());
    if let Some(dir) = &cli.output {
        println!("Output written under {}", dir.display());
    }

    let stalled: Vec<u32> = runs.iter().filter(|(r, _)| r.stalled).map(|(r, _)| r.ticks_per_floor).collect();
    if !stalled.is_empty() {
        bail!("run(s) at {stalled:?} ticks/floor stalled before every passenger was delivered");
    }
    Ok(())
}
