//! two_teams: two Roosters against two Donkeys on the standard 5×5 world.
//!
//! Usage: `two_teams [--ticks N] [--seed S]`.  Scores and tick summaries are written
//! to `output/two_teams/`; the final grid and a JSON summary go to stdout.
//! Set `RUST_LOG=debug` to follow individual moves.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use taxi_core::{SimConfig, Team, MAX_CLIENTS};
use taxi_grid::{BfsRouter, Grid};
use taxi_output::{CsvWriter, SimOutputObserver};
use taxi_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_INTERVAL_TICKS: u64 = 10;
const OUTPUT_DIR:            &str = "output/two_teams";

/// Two Roosters against two Donkeys on the standard world
#[derive(Parser)]
#[command(name = "two_teams", version, long_about = None)]
struct Cli {
    /// Number of ticks to simulate
    #[arg(short, long, default_value = "500")]
    ticks: u64,

    /// Seed for the shared simulation RNG
    #[arg(short, long, default_value = "42")]
    seed: u64,
}

#[derive(Serialize)]
struct Summary {
    config:  SimConfig,
    elapsed: f64,
    rooster: i64,
    donkey:  i64,
    agents:  Vec<AgentSummary>,
}

#[derive(Serialize)]
struct AgentSummary {
    name:  String,
    mode:  String,
    score: i64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = SimConfig {
        total_ticks: cli.ticks,
        seed: cli.seed,
        max_clients: MAX_CLIENTS,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
    };
    info!(ticks = cli.ticks, seed = cli.seed, "starting two_teams");

    // 1. World and agents.
    let grid = Grid::standard()?;
    let mut sim = SimBuilder::new(config.clone(), grid, BfsRouter::new())
        .team(Team::Rooster, 2)
        .team(Team::Donkey, 2)
        .build()?;

    // 2. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = SimOutputObserver::new(writer);

    // 3. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed().as_secs_f64();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Report.
    println!("{}", sim.render());
    println!("{:<8} {:<24} {:>6}", "Agent", "Mode", "Score");
    println!("{}", "-".repeat(40));
    for (key, score) in sim.scores() {
        let mode = sim.agent(key).map(|a| a.mode().as_str()).unwrap_or("?");
        println!("{:<8} {:<24} {:>6}", key.to_string(), mode, score);
    }
    println!();

    let summary = Summary {
        config,
        elapsed,
        rooster: sim.team_score(Team::Rooster),
        donkey: sim.team_score(Team::Donkey),
        agents: sim
            .agents
            .iter()
            .map(|a| AgentSummary {
                name:  a.name(),
                mode:  a.mode().as_str().to_owned(),
                score: a.score(),
            })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
