//! Legality filtering and check detection

use std::ops::Deref;

use log::{info, trace};

use crate::attacks::square_under_attack;
use crate::movegen::{generate_pseudo_legal, MoveList};
use crate::types::{Color, Move, Square};

use super::GameState;

/// A move temporarily written onto the board.
///
/// The board and Leader locations are restored when the guard is dropped,
/// on every exit path. Only shared access to the state is handed out while
/// the guard lives.
pub(super) struct Simulation<'a> {
    state: &'a mut GameState,
    mv: Move,
    saved_leaders: [Option<Square>; Color::NUM],
}

impl<'a> Simulation<'a> {
    pub(super) fn apply(state: &'a mut GameState, mv: Move) -> Self {
        let saved_leaders = state.apply_to_board(mv);
        Simulation { state, mv, saved_leaders }
    }
}

impl Deref for Simulation<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        &*self.state
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        self.state.restore_board(self.mv, self.saved_leaders);
        debug_assert!(self.state.leaders_consistent(), "leader locations diverged after revert");
    }
}

impl GameState {
    /// True when `color`'s Leader is attacked by the other side.
    ///
    /// A side without a Leader on the board is never in check.
    pub fn in_check(&self, color: Color) -> bool {
        self.leaders[color.index()]
            .is_some_and(|sq| square_under_attack(&self.board, sq, color.opponent()))
    }

    /// Whether the side to move is in check
    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.in_check(self.side_to_move)
    }

    /// Legal moves for the side to move, in generation order.
    ///
    /// Also recomputes the checkmate flag: no legal move while in check.
    pub fn legal_moves(&mut self) -> MoveList {
        let moves = self.filter_legal();
        let checkmate = moves.is_empty() && self.is_in_check();
        if checkmate && !self.checkmate {
            info!("checkmate: {} has no legal move", self.side_to_move);
        }
        self.checkmate = checkmate;
        moves
    }

    /// Legal moves of the piece on `from` (empty unless it belongs to the side to move)
    pub fn legal_moves_from(&mut self, from: Square) -> MoveList {
        let mut moves = self.legal_moves();
        moves.retain(|mv| mv.from() == from);
        moves
    }

    /// Whether the side to move has at least one legal move
    pub fn has_legal_move(&mut self) -> bool {
        let mut moves = MoveList::new();
        generate_pseudo_legal(&self.board, self.side_to_move, &mut moves);
        moves.into_iter().any(|mv| !self.leaves_leader_attacked(mv))
    }

    /// Pseudo-legal moves minus those that leave the mover's Leader attacked
    pub(super) fn filter_legal(&mut self) -> MoveList {
        let mut moves = MoveList::new();
        generate_pseudo_legal(&self.board, self.side_to_move, &mut moves);
        moves.retain(|mv| {
            let illegal = self.leaves_leader_attacked(*mv);
            if illegal {
                trace!("pruned {mv}: leader left in check");
            }
            !illegal
        });
        moves
    }

    /// Simulate `mv` and ask whether its mover's Leader is then attacked
    pub(super) fn leaves_leader_attacked(&mut self, mv: Move) -> bool {
        let mover = mv.piece_moved().map_or(self.side_to_move, |p| p.color);
        let simulated = Simulation::apply(self, mv);
        simulated.in_check(mover)
    }
}
