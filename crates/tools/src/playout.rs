//! Seeded random playouts
//!
//! Each ply picks a uniformly random legal move and checks two things before
//! keeping it: commit followed by undo restores the position exactly, and
//! the committed move does not leave the mover's Leader attacked.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use nine_chess_core::{Color, GameState, Move, Square};
use rand::prelude::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;

use crate::config::PlayoutConfig;

/// How a single playout stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEnd {
    Checkmate { winner: Color },
    /// No legal move without being in check
    NoLegalMoves,
    PlyLimit,
}

/// 1局の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub plies: u32,
    pub end: GameEnd,
}

/// Aggregate over a batch of playouts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayoutReport {
    pub games: u32,
    pub white_wins: u32,
    pub black_wins: u32,
    pub no_legal_moves: u32,
    pub ply_limit: u32,
    pub total_plies: u64,
}

impl PlayoutReport {
    fn record(&mut self, summary: GameSummary) {
        self.games += 1;
        self.total_plies += u64::from(summary.plies);
        match summary.end {
            GameEnd::Checkmate { winner: Color::White } => self.white_wins += 1,
            GameEnd::Checkmate { winner: Color::Black } => self.black_wins += 1,
            GameEnd::NoLegalMoves => self.no_legal_moves += 1,
            GameEnd::PlyLimit => self.ply_limit += 1,
        }
    }

    pub fn checkmates(&self) -> u32 {
        self.white_wins + self.black_wins
    }
}

/// Play `config.games` games from the start position
pub fn run_playouts(config: &PlayoutConfig) -> Result<PlayoutReport> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
    let mut report = PlayoutReport::default();

    for game in 0..config.games {
        let summary =
            play_game(&mut rng, config.max_plies).with_context(|| format!("game {game}"))?;
        debug!("game {game}: {:?} after {} plies", summary.end, summary.plies);
        report.record(summary);
    }

    info!(
        "{} games, {} checkmates, {} plies",
        report.games,
        report.checkmates(),
        report.total_plies
    );
    Ok(report)
}

/// One random game, stopping at the first position without a legal move
pub fn play_game<R: Rng + ?Sized>(rng: &mut R, max_plies: u32) -> Result<GameSummary> {
    let mut state = GameState::new();

    for ply in 0..max_plies {
        let moves = state.legal_moves();
        let Some(&mv) = moves.choose(rng) else {
            let end = if state.is_checkmate() {
                GameEnd::Checkmate { winner: state.side_to_move().opponent() }
            } else {
                GameEnd::NoLegalMoves
            };
            return Ok(GameSummary { plies: ply, end });
        };

        check_round_trip(&mut state, mv).with_context(|| format!("ply {ply}"))?;

        let mover = state.side_to_move();
        state.make_move(mv)?;
        if state.in_check(mover) {
            bail!("ply {ply}: {mv} left the {mover} Leader attacked");
        }
    }

    Ok(GameSummary { plies: max_plies, end: GameEnd::PlyLimit })
}

fn leaders(state: &GameState) -> [Option<Square>; 2] {
    Color::ALL.map(|c| state.leader_location(c))
}

fn check_round_trip(state: &mut GameState, mv: Move) -> Result<()> {
    let board = state.board().clone();
    let side = state.side_to_move();
    let before = leaders(state);

    state.make_move(mv)?;
    state.undo_move();

    if state.board() != &board {
        bail!("{mv}: board differs after undo\n{}", state.board());
    }
    if state.side_to_move() != side || leaders(state) != before {
        bail!("{mv}: side to move or leader locations differ after undo");
    }
    Ok(())
}
