//! Move representation

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{Piece, Square};
use crate::board::Board;

/// A single ply.
///
/// The moved and captured pieces are read from the board when the move is
/// built and never looked up again, so a logged move stays valid after the
/// board changes.
///
/// Equality and hashing use only the coordinates (see [`Move::key`]).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Move {
    from: Square,
    to: Square,
    piece_moved: Option<Piece>,
    piece_captured: Option<Piece>,
}

impl Move {
    /// Snapshot a move from `from` to `to` against the current board
    #[inline]
    pub fn new(from: Square, to: Square, board: &Board) -> Self {
        Move {
            from,
            to,
            piece_moved: board.piece_on(from),
            piece_captured: board.piece_on(to),
        }
    }

    #[inline]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Piece that stood on the origin square when the move was built
    #[inline]
    pub const fn piece_moved(&self) -> Option<Piece> {
        self.piece_moved
    }

    /// Piece that stood on the destination square, `None` for a quiet move
    #[inline]
    pub const fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn is_leader_move(&self) -> bool {
        self.piece_moved.is_some_and(Piece::is_leader)
    }

    /// Identity key: from.row*1000 + from.col*100 + to.row*10 + to.col
    #[inline]
    pub const fn key(&self) -> u16 {
        self.from.row() as u16 * 1000
            + self.from.col() as u16 * 100
            + self.to.row() as u16 * 10
            + self.to.col() as u16
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, PieceKind};

    #[test]
    fn test_move_snapshot() {
        let board = Board::startpos();
        let mv = Move::new(Square::new(7, 4), Square::new(6, 4), &board);
        assert_eq!(mv.piece_moved(), Some(Piece::new(Color::White, PieceKind::Soldier)));
        assert_eq!(mv.piece_captured(), None);
        assert!(!mv.is_capture());
        assert!(!mv.is_leader_move());
    }

    #[test]
    fn test_move_key() {
        let board = Board::empty();
        let mv = Move::new(Square::new(7, 4), Square::new(5, 4), &board);
        assert_eq!(mv.key(), 7454);
        let mv = Move::new(Square::new(0, 0), Square::new(8, 8), &board);
        assert_eq!(mv.key(), 88);
    }

    #[test]
    fn test_equality_ignores_captured_piece() {
        let empty = Board::empty();
        let mut occupied = Board::empty();
        occupied.put_piece(Square::new(4, 5), Piece::new(Color::Black, PieceKind::Soldier));

        let quiet = Move::new(Square::new(4, 4), Square::new(4, 5), &empty);
        let capture = Move::new(Square::new(4, 4), Square::new(4, 5), &occupied);
        assert!(!quiet.is_capture());
        assert!(capture.is_capture());
        assert_eq!(quiet, capture);

        let mut set = std::collections::HashSet::new();
        set.insert(quiet);
        assert!(set.contains(&capture));
    }

    #[test]
    fn test_display() {
        let board = Board::empty();
        let mv = Move::new(Square::new(8, 4), Square::new(7, 3), &board);
        assert_eq!(mv.to_string(), "(8,4)->(7,3)");
    }
}
