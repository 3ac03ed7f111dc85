//! Core GameState structure and basic methods

use crate::board::Board;
use crate::types::{Color, Move, Piece, PieceKind, Square};

/// Game state
///
/// One live instance per game: mutated in place by commit and undo, rebuilt
/// from scratch for a new game. Not `Clone`.
#[derive(Debug)]
pub struct GameState {
    pub(super) board: Board,

    /// 手番 (White or Black)
    pub(super) side_to_move: Color,

    /// Square of each side's Leader, indexed by `Color::index`.
    ///
    /// Always equal to the square holding that Leader on `board`; `None`
    /// when the side has no Leader (analysis positions, or a Leader captured
    /// inside a simulation).
    pub(super) leaders: [Option<Square>; Color::NUM],

    /// Committed moves, oldest first
    pub(super) move_log: Vec<Move>,

    /// Result of the last legal move query
    pub(super) checkmate: bool,
}

impl GameState {
    /// Canonical start position, White to move
    pub fn new() -> Self {
        Self::from_board(Board::startpos(), Color::White)
    }

    /// Arbitrary position; Leader locations are read from the board
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let leaders = [board.find_leader(Color::White), board.find_leader(Color::Black)];
        GameState {
            board,
            side_to_move,
            leaders,
            move_log: Vec::new(),
            checkmate: false,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn leader_location(&self, color: Color) -> Option<Square> {
        self.leaders[color.index()]
    }

    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// Checkmate flag as of the last [`GameState::legal_moves`] call.
    ///
    /// Commit and undo reset it to `false`.
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Leader locations agree with the board
    pub(super) fn leaders_consistent(&self) -> bool {
        Color::ALL.iter().all(|&color| match self.leaders[color.index()] {
            Some(sq) => self.board.piece_on(sq) == Some(Piece::new(color, PieceKind::Leader)),
            None => self.board.find_leader(color).is_none(),
        })
    }

    /// Write `mv` onto the board and keep the Leader locations in step.
    ///
    /// Returns the Leader locations from before the write.
    pub(super) fn apply_to_board(&mut self, mv: Move) -> [Option<Square>; Color::NUM] {
        let previous = self.leaders;

        self.board.set(mv.from(), None);
        self.board.set(mv.to(), mv.piece_moved());

        if let Some(captured) = mv.piece_captured().filter(|p| p.is_leader()) {
            self.leaders[captured.color.index()] = None;
        }
        if let Some(moved) = mv.piece_moved().filter(|p| p.is_leader()) {
            self.leaders[moved.color.index()] = Some(mv.to());
        }

        previous
    }

    /// Put back exactly what `mv` snapshotted, including empty squares
    pub(super) fn restore_board(&mut self, mv: Move, leaders: [Option<Square>; Color::NUM]) {
        self.board.set(mv.from(), mv.piece_moved());
        self.board.set(mv.to(), mv.piece_captured());
        self.leaders = leaders;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
