//! Move execution and undo functionality

use log::debug;

use crate::error::{GameError, GameResult};
use crate::movegen::{generate_for_square, MoveList};
use crate::types::Move;

use super::GameState;

impl GameState {
    /// Play `mv` for the side to move.
    ///
    /// The move must be one of [`GameState::legal_moves`]; anything else is
    /// rejected with [`GameError::IllegalMoveRequested`] and the state is left
    /// untouched. Matching is by coordinates, and the engine's own snapshot
    /// of the move is what gets committed and logged.
    pub fn make_move(&mut self, mv: Move) -> GameResult<()> {
        match self.find_legal(mv) {
            Some(legal) => {
                self.commit(legal);
                Ok(())
            }
            None => {
                debug!("rejected {mv}: not legal for {}", self.side_to_move);
                Err(GameError::IllegalMoveRequested { mv })
            }
        }
    }

    /// Take back the last committed move.
    ///
    /// Returns the popped move, or `None` (and does nothing) when the log is
    /// empty. The checkmate flag is cleared.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;

        self.board.set(mv.from(), mv.piece_moved());
        self.board.set(mv.to(), mv.piece_captured());
        if let Some(moved) = mv.piece_moved().filter(|p| p.is_leader()) {
            self.leaders[moved.color.index()] = Some(mv.from());
        }
        if let Some(captured) = mv.piece_captured().filter(|p| p.is_leader()) {
            self.leaders[captured.color.index()] = Some(mv.to());
        }
        self.side_to_move = self.side_to_move.opponent();
        self.checkmate = false;

        debug!("undo {mv}, {} to move", self.side_to_move);
        debug_assert!(self.leaders_consistent(), "leader locations diverged after undo");
        Some(mv)
    }

    /// Write `mv` without validation, log it and pass the turn
    pub(crate) fn commit(&mut self, mv: Move) {
        self.apply_to_board(mv);
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.opponent();
        self.checkmate = false;

        debug!("commit {mv} (ply {}), {} to move", self.move_log.len(), self.side_to_move);
        debug_assert!(self.leaders_consistent(), "leader locations diverged after commit");
    }

    /// Engine copy of `mv` if it is legal in the current position
    fn find_legal(&mut self, mv: Move) -> Option<Move> {
        let mut candidates = MoveList::new();
        generate_for_square(&self.board, mv.from(), self.side_to_move, &mut candidates);
        let candidate = candidates.into_iter().find(|c| *c == mv)?;
        (!self.leaves_leader_attacked(candidate)).then_some(candidate)
    }
}
