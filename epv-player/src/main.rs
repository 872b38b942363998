//! Player simulator (epv-sim) - Main entry point
//!
//! Replays a scenario of host, network and engine events against a player
//! container wired to simulated collaborators, then prints the resulting state
//! as JSON on stdout. Logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use epv_common::PlayerConfig;
use epv_player::sim::Scenario;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for epv-sim
#[derive(Parser, Debug)]
#[command(name = "epv-sim")]
#[command(about = "Replay player container scenarios against simulated collaborators")]
#[command(version)]
struct Args {
    /// Scenario file (TOML)
    scenario: PathBuf,

    /// Configuration file; EPV_CONFIG and the platform config dir are tried otherwise
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with the simulated network offline
    #[arg(long)]
    offline: bool,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = PlayerConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?;
    if args.offline {
        config.start_online = false;
    }

    // Initialize tracing
    let level = config.logging.level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("epv_player={level},epv_common={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let scenario = Scenario::from_file(&args.scenario)
        .with_context(|| format!("Failed to load scenario {}", args.scenario.display()))?;
    info!(
        "Running {} steps from {}",
        scenario.steps.len(),
        args.scenario.display()
    );

    let report = scenario.run(&config);
    let json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("Failed to serialize report")?;
    println!("{}", json);

    Ok(())
}
