//! Game session: one live `GameState` plus a replay record for redo
//!
//! `GameState::undo_move` discards the popped move, so redo needs its own
//! forward history. The session keeps the full record of played moves and a
//! cursor into it; undo steps the cursor back, redo replays the recorded
//! move through the engine, and a new move truncates the redo tail.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::GameResult;
use crate::movegen::MoveList;
use crate::position::GameState;
use crate::types::{Color, Move, Square};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Checkmate { winner: Color },
}

/// Game session
#[derive(Debug)]
pub struct Session {
    state: GameState,
    /// Every move played, including undone ones still available for redo
    record: Vec<Move>,
    /// Number of `record` entries currently applied to `state`
    cursor: usize,
    /// Legal moves of the current position
    legal: MoveList,
    outcome: Option<Outcome>,
}

impl Session {
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    /// Session over an arbitrary starting position
    pub fn from_state(state: GameState) -> Self {
        let mut session = Session {
            state,
            record: Vec::new(),
            cursor: 0,
            legal: MoveList::new(),
            outcome: None,
        };
        session.refresh();
        session
    }

    /// Throw the current game away and start over from the canonical position
    pub fn new_game(&mut self) {
        debug!("new game");
        *self = Self::new();
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal
    }

    /// Legal moves of the piece on `from`
    pub fn legal_moves_from(&self, from: Square) -> impl Iterator<Item = &Move> + '_ {
        self.legal.iter().filter(move |mv| mv.from() == from)
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Moves currently on the board, oldest first
    #[inline]
    pub fn played(&self) -> &[Move] {
        &self.record[..self.cursor]
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.record.len()
    }

    /// Play a move; a successful move drops everything after the cursor
    pub fn play(&mut self, mv: Move) -> GameResult<()> {
        self.state.make_move(mv)?;
        self.record.truncate(self.cursor);
        self.record.extend(self.state.last_move().copied());
        self.cursor += 1;
        self.refresh();
        Ok(())
    }

    /// Step back one move; `false` when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.state.undo_move();
        self.cursor -= 1;
        self.refresh();
        true
    }

    /// Replay the next undone move; `false` when there is nothing to redo
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        let mv = self.record[self.cursor];
        if let Err(err) = self.state.make_move(mv) {
            // the record only holds moves that were legal at this cursor
            debug!("redo failed: {err}");
            return false;
        }
        self.cursor += 1;
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        self.legal = self.state.legal_moves();
        self.outcome = self
            .state
            .is_checkmate()
            .then(|| Outcome::Checkmate { winner: self.state.side_to_move().opponent() });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
