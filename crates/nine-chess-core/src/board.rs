//! Board representation
//!
//! A fixed 9×9 grid of `Option<Piece>`. Writes overwrite the cell, so a square
//! never holds more than one piece.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Color, Piece, PieceKind, Square};

/// Back rank from column 0 to column 8, identical for both sides
const BACK_RANK: [PieceKind; 9] = [
    PieceKind::AirMarshal,
    PieceKind::NavySeal,
    PieceKind::ViceGeneral,
    PieceKind::Battalion,
    PieceKind::Leader,
    PieceKind::General,
    PieceKind::ViceGeneral,
    PieceKind::NavySeal,
    PieceKind::AirMarshal,
];

/// Board representation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Piece on each square, `cells[row][col]`
    cells: [[Option<Piece>; 9]; 9],
}

impl Board {
    /// Create empty board
    pub fn empty() -> Self {
        Board { cells: [[None; 9]; 9] }
    }

    /// Canonical start position
    ///
    /// Black occupies rows 0-1, White rows 7-8. Both Leaders start on
    /// column 4.
    pub fn startpos() -> Self {
        let mut board = Self::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.put_piece(Square::new(0, col), Piece::new(Color::Black, kind));
            board.put_piece(Square::new(1, col), Piece::new(Color::Black, PieceKind::Soldier));
            board.put_piece(Square::new(7, col), Piece::new(Color::White, PieceKind::Soldier));
            board.put_piece(Square::new(8, col), Piece::new(Color::White, kind));
        }
        board
    }

    /// Get piece on square
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_on(sq).is_none()
    }

    /// Overwrite a square with a piece or with nothing
    #[inline]
    pub fn set(&mut self, sq: Square, content: Option<Piece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = content;
    }

    /// Place piece on board, replacing whatever was there
    #[inline]
    pub fn put_piece(&mut self, sq: Square, piece: Piece) {
        self.set(sq, Some(piece));
    }

    /// Remove piece from board
    #[inline]
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    /// Squares and pieces of one color, row-major
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_on(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Find the Leader of `color` (first in row-major order)
    pub fn find_leader(&self, color: Color) -> Option<Square> {
        self.pieces(color).find(|(_, piece)| piece.is_leader()).map(|(sq, _)| sq)
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces(color).filter(|(_, piece)| piece.kind == kind).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

/// Grid of two-character cells, Black's back rank first
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..Square::SIZE {
            for col in 0..Square::SIZE {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self.piece_on(Square::new(row, col)) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => f.write_str("--")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
