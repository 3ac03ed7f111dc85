//! Side (Color)

use serde::{Deserialize, Serialize};

/// Side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Number of colors
    pub const NUM: usize = 2;

    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The other side
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Array index
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row delta of one step "forward" for this side.
    ///
    /// White advances toward row 0, Black toward row 8.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the Soldiers start on
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 1,
        }
    }

    /// Prefix used in the two-character cell notation (`w` / `b`)
    #[inline]
    pub const fn prefix(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}
