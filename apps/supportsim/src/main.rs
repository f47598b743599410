//! supportsim — support-network / MFQ trajectory simulator.
//!
//! Simulates a population of individuals, each with a family-and-friends
//! support network and two ten-episode MFQ score trajectories (with and
//! without that network), and writes one row per individual per episode.
//!
//! ```text
//! supportsim all                         # the three result tables
//! supportsim baseline --networks 200     # quick baseline only
//! supportsim vary-support --config base.json --out runs/
//! RUST_LOG=sn_sim=debug supportsim baseline
//! ```

mod scenario;


use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sn_sim::PopulationConfig;

use scenario::{Scenario, run_scenario};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "supportsim")]
#[command(about = "Simulate support networks and MFQ trajectories, write CSV tables")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory the CSV tables are written to (created if missing)
    #[arg(long, global = true, default_value = "results")]
    out: PathBuf,

    /// JSON file holding a population configuration; omitted fields keep
    /// their baseline values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the number of individuals per run
    #[arg(long, global = true)]
    networks: Option<u64>,

    /// Worker threads for the parallel runner
    #[arg(long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// One run of the base configuration
    Baseline,
    /// Sweep p_connection_1 over 0.15..=0.65
    VaryP1,
    /// Sweep increase_support_level over 0.25..=7
    VarySupport,
    /// All three tables
    All,
}

impl Command {
    fn scenarios(self) -> &'static [Scenario] {
        match self {
            Command::Baseline    => &[Scenario::Baseline],
            Command::VaryP1      => &[Scenario::VaryP1],
            Command::VarySupport => &[Scenario::VarySupport],
            Command::All         => &Scenario::ALL,
        }
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// Base configuration: file (or baseline defaults) plus CLI overrides.
fn load_config(path: Option<&Path>, networks: Option<u64>, threads: Option<usize>) -> Result<PopulationConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<PopulationConfig>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => PopulationConfig::default(),
    };
    if let Some(n) = networks {
        config.num_networks = n;
    }
    if threads.is_some() {
        config.num_threads = threads;
    }
    config.validate()?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "supportsim=info,sn_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.networks, cli.threads)?;

    fs::create_dir_all(&cli.out)
        .with_context(|| format!("creating {}", cli.out.display()))?;

    info!(
        networks = config.num_networks,
        episodes = config.mfq.num_episodes,
        out = %cli.out.display(),
        "starting"
    );

    let started = Instant::now();
    for &scenario in cli.command.scenarios() {
        run_scenario(scenario, &config, &cli.out)?;
    }
    info!(elapsed_secs = started.elapsed().as_secs_f64(), "done");
    Ok(())
}
