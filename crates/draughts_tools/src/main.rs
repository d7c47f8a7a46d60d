//! Draughts diagnostics CLI
//!
//! Show the starting board, count perft nodes, or run seeded random
//! playouts that check the rules engine's invariants.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use draughts_core::{Engine, perft, perft_divide};
use draughts_tools::{PlayoutConfig, run_playout};
use log::info;

#[derive(Parser)]
#[command(name = "draughts", version, about = "Draughts rules engine diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the starting position and its legal moves
    Show,
    /// Count leaf nodes from the starting position
    Perft {
        #[arg(short, long, default_value_t = 5)]
        depth: u8,
        /// Break the deepest count down per root move
        #[arg(long)]
        divide: bool,
    },
    /// Play seeded random games and check invariants after every move
    Playout {
        /// TOML file with playout settings; flags override it
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        games: Option<u32>,
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(long)]
        max_plies: Option<u32>,
        /// Write the full JSON report here
        #[arg(short, long)]
        report: Option<PathBuf>,
    },
}

fn show() {
    let engine = Engine::new();
    println!("{}", engine.position());
    println!();
    let moves: Vec<String> = engine.legal_moves().iter().map(|mv| mv.to_string()).collect();
    println!("legal: {}", moves.join(" "));
}

fn run_perft(depth: u8, divide: bool) {
    let engine = Engine::new();
    for d in 1..=depth {
        let start = Instant::now();
        let nodes = perft(&engine, d);
        let elapsed = start.elapsed();
        println!(
            "depth {d}: {nodes} nodes, elapsed {elapsed:.3?} ({:.1} Kn/s)",
            (nodes as f64 / 1_000.0) / elapsed.as_secs_f64().max(1e-9)
        );
    }
    if divide {
        println!();
        for (mv, nodes) in perft_divide(&engine, depth) {
            println!("{mv}: {nodes}");
        }
    }
}

fn run_playouts(
    config: Option<PathBuf>,
    games: Option<u32>,
    seed: Option<u64>,
    max_plies: Option<u32>,
    report: Option<PathBuf>,
) -> Result<()> {
    let mut cfg = match config {
        Some(path) => PlayoutConfig::load(&path)?,
        None => PlayoutConfig::default(),
    };
    if let Some(games) = games {
        cfg.games = games;
    }
    if let Some(seed) = seed {
        cfg.seed = seed;
    }
    if let Some(max_plies) = max_plies {
        cfg.max_plies = max_plies;
    }
    if report.is_some() {
        cfg.report = report;
    }

    info!(
        "playing {} games from seed {} (max {} plies)",
        cfg.games, cfg.seed, cfg.max_plies
    );
    let results = run_playout(&cfg)?;
    results.print_summary();

    if let Some(path) = &cfg.report {
        results.save(path)?;
        info!("report written to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Show => show(),
        Command::Perft { depth, divide } => run_perft(depth, divide),
        Command::Playout {
            config,
            games,
            seed,
            max_plies,
            report,
        } => run_playouts(config, games, seed, max_plies, report)?,
    }
    Ok(())
}
