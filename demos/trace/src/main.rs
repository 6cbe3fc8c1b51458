//! trace — runs a Random Waypoint population and prints a CSV position trace.
//!
//! Usage:
//!
//! ```text
//! trace [scenario.json] > trace.csv
//! ```
//!
//! Without an argument the built-in defaults below are used.  Logs go to
//! stderr; set `RUST_LOG=rwp_mobility=trace` to see every leg completion.

mod writer;

use std::fs::File;
use std::io::{self, BufReader};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;

use rwp_core::{Scenario, SimConfig};
use rwp_mobility::WaypointConfig;
use rwp_sim::SimBuilder;

use writer::TraceObserver;

// ── Defaults ──────────────────────────────────────────────────────────────────

const NODE_COUNT: usize = 20;
const SEED:       u64   = 42;

/// Shape of the optional JSON scenario file.
#[derive(Deserialize)]
struct TraceConfig {
    sim:      SimConfig,
    waypoint: WaypointConfig,
    nodes:    usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig {
                start_secs:            0.0,
                step_secs:             1.0,
                total_steps:           1_800, // 30 simulated minutes
                seed:                  SEED,
                num_threads:           None, // all logical cores
                output_interval_steps: 10,
            },
            waypoint: WaypointConfig {
                velocity_mean: 1.4,
                velocity_sd:   0.4,
                pause_mean:    20.0,
                pause_sd:      10.0,
                scenario:      Scenario::new(500, 300),
            },
            nodes: NODE_COUNT,
        }
    }
}

fn load_config() -> Result<TraceConfig> {
    match std::env::args().nth(1) {
        None => Ok(TraceConfig::default()),
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("opening {path}"))?;
            serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parsing {path}"))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cfg = load_config()?;

    if let Some(n) = cfg.sim.num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .context("configuring rayon thread pool")?;
    }

    let mut sim = SimBuilder::new(cfg.sim, cfg.waypoint)
        .node_count(cfg.nodes)
        .build()?;

    let mut observer = TraceObserver::new(io::stdout().lock())?;
    let started = Instant::now();
    sim.run(&mut observer);
    let (arrivals, off_map) = observer.finish()?;

    tracing::info!(
        arrivals,
        off_map,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "trace written"
    );
    Ok(())
}
