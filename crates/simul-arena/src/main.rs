//! Simul Arena - plays random simultaneous chess games and reports results.

use anyhow::Context;
use clap::Parser;
use simul_arena::config::ArenaConfig;
use simul_arena::report::ArenaReport;
use simul_arena::runner::RandomRunner;
use std::path::PathBuf;
use tracing::Level;

/// Simul Arena - random self-play for simultaneous chess.
#[derive(Parser)]
#[command(name = "simul-arena")]
#[command(about = "Plays seeded random simultaneous chess games")]
struct Args {
    /// Path to the config file (defaults to ./arena.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of games to play
    #[arg(short, long)]
    games: Option<u32>,

    /// Turn limit per game
    #[arg(long)]
    max_turns: Option<u32>,

    /// Seed for the move picker
    #[arg(long)]
    seed: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => ArenaConfig::load_from(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ArenaConfig::load()?,
    };
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(max_turns) = args.max_turns {
        config.max_turns = max_turns;
    }
    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);

    let rules = config.rules()?;
    let variant = if config.variant.is_some() {
        "custom"
    } else {
        "regular"
    };
    tracing::info!(
        games = config.games,
        max_turns = config.max_turns,
        seed,
        variant,
        "starting arena run"
    );

    let mut runner = RandomRunner::new(&*rules, seed, config.max_turns);
    let mut report = ArenaReport::new(seed, variant);
    for game in 1..=config.games {
        let record = runner.play_game()?;
        tracing::info!(game, turns = record.turns.len(), result = %record.result, "game finished");
        report.push(&record);
    }

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
