//! Headless simulator: generate maps, play runs, batch balance statistics.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gravespin_assets::{default_registry, default_run_config};
use gravespin_core::{
    GameError, GameRng, MapDto, MapGenerator, RunEngine, RunPhase, XorShiftRng,
};
use rayon::prelude::*;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "gravespin-sim", about = "Headless Gravespin simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a map and print its DTO as JSON, or validate one from a file
    Map {
        #[arg(long)]
        seed: Option<u64>,
        /// Validate a saved map JSON instead of generating
        #[arg(long)]
        validate: Option<PathBuf>,
    },
    /// Play one full run with a random-walk policy and print the final view
    Run {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Simulate many runs in parallel and print aggregate statistics
    Batch {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1000)]
        count: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Map { seed, validate } => match validate {
            Some(path) => validate_map(&path),
            None => print_map(resolve_seed(seed)),
        },
        Command::Run { seed } => play_one(resolve_seed(seed)),
        Command::Batch { seed, count } => batch(resolve_seed(seed), count),
    }
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

fn print_map(seed: u64) -> Result<()> {
    let registry = default_registry();
    let config = default_run_config();
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let map = MapGenerator::new(&config.ruleset, &registry).generate(&mut rng)?;
    println!("{}", serde_json::to_string_pretty(&map.to_dto())?);
    Ok(())
}

fn validate_map(path: &Path) -> Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let dto: MapDto = serde_json::from_str(&json).context("parsing map JSON")?;
    let map = dto.into_map();
    map.validate().context("map failed validation")?;
    println!("ok: {} nodes, path length {}", map.node_count(), map.path.len());
    Ok(())
}

fn play_one(seed: u64) -> Result<()> {
    tracing::info!(seed, "simulating run");
    let engine = play_run(seed)?;
    println!("{}", serde_json::to_string_pretty(&engine.view())?);
    Ok(())
}

/// Walk a run to its end: buy whatever is affordable, spin when armed,
/// otherwise pick a random outgoing edge.
fn play_run(seed: u64) -> Result<RunEngine> {
    let registry = default_registry();
    let config = default_run_config();
    let mut engine = RunEngine::new(config, &registry, seed)?;
    let mut policy = XorShiftRng::seed_from_u64(seed ^ 0x5eed);
    // hard ceiling so a surprise in generation cannot loop forever
    for _ in 0..10_000 {
        match engine.phase() {
            RunPhase::Victory | RunPhase::Defeat => break,
            RunPhase::Spinning => match engine.spin() {
                Ok(_) => {}
                // the engine already recorded the defeat
                Err(GameError::NotEnoughGold { .. }) => break,
                Err(err) => return Err(err.into()),
            },
            RunPhase::Traverse => {
                let stock: Vec<String> = engine
                    .shop_stock()
                    .iter()
                    .map(|r| r.name.clone())
                    .collect();
                for relic in stock {
                    // skipping what we cannot afford is part of the policy
                    let _ = engine.buy_relic(&relic);
                }
                let moves = engine.available_moves();
                match policy.pick(&moves) {
                    Some(&next) => engine.travel_to(next)?,
                    None => break,
                }
            }
        }
    }
    Ok(engine)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchStats {
    runs: u64,
    victories: u64,
    defeats: u64,
    victory_rate: f64,
    mean_rounds: f64,
    mean_final_gold: f64,
    mean_relics: f64,
}

fn batch(seed: u64, count: u64) -> Result<()> {
    tracing::info!(seed, count, "simulating batch");
    let finished: Vec<RunEngine> = (0..count)
        .into_par_iter()
        .map(|i| play_run(seed.wrapping_add(i)))
        .collect::<Result<Vec<_>>>()?;

    let runs = finished.len() as u64;
    let victories = finished
        .iter()
        .filter(|e| e.phase() == RunPhase::Victory)
        .count() as u64;
    let defeats = finished
        .iter()
        .filter(|e| e.phase() == RunPhase::Defeat)
        .count() as u64;
    let total_rounds: u64 = finished.iter().map(|e| e.state().round as u64).sum();
    let total_gold: u64 = finished.iter().map(|e| e.wallet().balance() as u64).sum();
    let total_relics: u64 = finished.iter().map(|e| e.effects().relics().len() as u64).sum();

    let stats = BatchStats {
        runs,
        victories,
        defeats,
        victory_rate: victories as f64 / runs.max(1) as f64,
        mean_rounds: total_rounds as f64 / runs.max(1) as f64,
        mean_final_gold: total_gold as f64 / runs.max(1) as f64,
        mean_relics: total_relics as f64 / runs.max(1) as f64,
    };
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
