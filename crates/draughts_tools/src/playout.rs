//! Random playouts: seeded games of uniformly random legal moves, with the
//! board invariants re-checked after every move.

use anyhow::{Context, bail, ensure};
use draughts_core::{Bitboard, Color, Engine, Move, capture_landings};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::PlayoutConfig;

#[cfg(test)]
#[path = "playout_tests.rs"]
mod playout_tests;

/// How a single playout ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The loser had no legal move on its turn
    Win(Color),
    /// The ply limit was reached first
    Unfinished,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: u64,
    pub plies: u32,
    pub captures: u32,
    pub promotions: u32,
    /// Most captures made by one piece in a single turn
    pub longest_chain: u32,
    pub outcome: GameOutcome,
    pub moves: Vec<Move>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayoutReport {
    pub config: PlayoutConfig,
    pub white_wins: u32,
    pub black_wins: u32,
    pub unfinished: u32,
    pub total_plies: u64,
    pub games: Vec<GameRecord>,
}

impl PlayoutReport {
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }

    pub fn print_summary(&self) {
        println!("=== Playout Summary ===");
        println!("Games:       {}", self.games.len());
        println!("White wins:  {}", self.white_wins);
        println!("Black wins:  {}", self.black_wins);
        println!("Unfinished:  {}", self.unfinished);
        println!("Total plies: {}", self.total_plies);
        if let Some(longest) = self.games.iter().map(|g| g.longest_chain).max() {
            println!("Longest multi-jump: {longest}");
        }
    }
}

/// Play every game described by `config`.
pub fn run_playout(config: &PlayoutConfig) -> anyhow::Result<PlayoutReport> {
    let mut report = PlayoutReport {
        config: config.clone(),
        white_wins: 0,
        black_wins: 0,
        unfinished: 0,
        total_plies: 0,
        games: Vec::with_capacity(config.games as usize),
    };

    for i in 0..config.games {
        let seed = config.seed.wrapping_add(u64::from(i));
        let game = play_game(seed, config.max_plies)?;
        debug!("game {i} (seed {seed}): {:?} after {} plies", game.outcome, game.plies);

        match game.outcome {
            GameOutcome::Win(Color::White) => report.white_wins += 1,
            GameOutcome::Win(Color::Black) => report.black_wins += 1,
            GameOutcome::Unfinished => report.unfinished += 1,
        }
        report.total_plies += u64::from(game.plies);
        report.games.push(game);
    }

    info!(
        "{} games: {} white wins, {} black wins, {} unfinished",
        report.games.len(),
        report.white_wins,
        report.black_wins,
        report.unfinished
    );
    Ok(report)
}

/// Play one game from the starting position with moves drawn from `seed`.
pub fn play_game(seed: u64, max_plies: u32) -> anyhow::Result<GameRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut engine = Engine::new();
    let mut moves = Vec::with_capacity(32);
    let mut record = GameRecord {
        seed,
        plies: 0,
        captures: 0,
        promotions: 0,
        longest_chain: 0,
        outcome: GameOutcome::Unfinished,
        moves: Vec::new(),
    };
    let mut chain = 0u32;

    while record.plies < max_plies {
        engine.legal_moves_into(&mut moves);
        check_move_list(&engine, &moves)
            .with_context(|| format!("seed {seed}, ply {}", record.plies))?;

        let Some(&mv) = moves.choose(&mut rng) else {
            record.outcome = GameOutcome::Win(engine.turn().other());
            break;
        };

        let mover = engine.turn();
        engine.act(mv)?;
        check_position(&engine).with_context(|| format!("seed {seed}, after {mv}"))?;

        record.plies += 1;
        record.moves.push(mv);
        if mv.is_promotion() {
            record.promotions += 1;
        }
        if mv.is_capture() {
            record.captures += 1;
            chain += 1;
            record.longest_chain = record.longest_chain.max(chain);
        }
        if engine.turn() != mover {
            chain = 0;
        }
    }
    Ok(record)
}

/// Forced capture and jump continuation, as seen from the move list.
fn check_move_list(engine: &Engine, moves: &[Move]) -> anyhow::Result<()> {
    if let Some(sq) = engine.jumper() {
        ensure!(!moves.is_empty(), "jump in progress but no continuation offered");
        ensure!(
            moves.iter().all(|mv| mv.from == sq && mv.is_capture()),
            "move list strays from the jumping piece"
        );
    } else if !capture_landings(engine.position()).is_empty() {
        ensure!(
            moves.iter().all(Move::is_capture),
            "quiet move offered while a capture is available"
        );
    }
    Ok(())
}

fn check_position(engine: &Engine) -> anyhow::Result<()> {
    let pos = engine.position();
    if !(pos.pieces[0] & pos.pieces[1]).is_empty() {
        bail!("white and black occupancy overlap");
    }
    if !(pos.kings & !pos.occupied()).is_empty() {
        bail!("king overlay outside occupied squares");
    }
    ensure!(
        (pos.occupied() & !Bitboard::DARK_SQUARES).is_empty(),
        "piece on a light square"
    );
    Ok(())
}
