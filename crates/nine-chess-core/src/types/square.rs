//! Square on the 9×9 board

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Square (0-80)
///
/// Layout is row-major: index = row * 9 + col. Row 0 is Black's back rank,
/// row 8 is White's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "(u8, u8)", try_from = "(u8, u8)")]
pub struct Square(u8);

impl Square {
    /// Board edge length
    pub const SIZE: u8 = 9;
    /// Number of squares
    pub const NUM: usize = 81;

    /// Create a square from row and column
    ///
    /// Both must be below 9; callers with untrusted input use [`Square::try_new`].
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        debug_assert!(row < Self::SIZE && col < Self::SIZE);
        Square(row * Self::SIZE + col)
    }

    /// Create a square, rejecting off-board coordinates
    pub fn try_new(row: u8, col: u8) -> GameResult<Square> {
        if row < Self::SIZE && col < Self::SIZE {
            Ok(Square::new(row, col))
        } else {
            Err(GameError::InvalidSquare { row, col })
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / Self::SIZE
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % Self::SIZE
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Square displaced by (`dr`, `dc`), or `None` when that leaves the board
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if (0..Self::SIZE as i8).contains(&row) && (0..Self::SIZE as i8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row(), self.col())
    }
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> (u8, u8) {
        (sq.row(), sq.col())
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = GameError;

    fn try_from((row, col): (u8, u8)) -> GameResult<Square> {
        Square::try_new(row, col)
    }
}
