//! Pieces (PieceKind / Piece)

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Color;

/// Piece kinds (7 kinds)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    Leader = 0,      // P
    General = 1,     // G
    ViceGeneral = 2, // V
    AirMarshal = 3,  // A
    NavySeal = 4,    // N
    Battalion = 5,   // B
    Soldier = 6,     // S
}

impl PieceKind {
    /// Number of piece kinds
    pub const NUM: usize = 7;

    pub const ALL: [PieceKind; 7] = [
        PieceKind::Leader,
        PieceKind::General,
        PieceKind::ViceGeneral,
        PieceKind::AirMarshal,
        PieceKind::NavySeal,
        PieceKind::Battalion,
        PieceKind::Soldier,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter code used in the cell notation
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Leader => 'P',
            PieceKind::General => 'G',
            PieceKind::ViceGeneral => 'V',
            PieceKind::AirMarshal => 'A',
            PieceKind::NavySeal => 'N',
            PieceKind::Battalion => 'B',
            PieceKind::Soldier => 'S',
        }
    }

    pub const fn from_letter(c: char) -> Option<PieceKind> {
        match c {
            'P' => Some(PieceKind::Leader),
            'G' => Some(PieceKind::General),
            'V' => Some(PieceKind::ViceGeneral),
            'A' => Some(PieceKind::AirMarshal),
            'N' => Some(PieceKind::NavySeal),
            'B' => Some(PieceKind::Battalion),
            'S' => Some(PieceKind::Soldier),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Leader => "Leader",
            PieceKind::General => "General",
            PieceKind::ViceGeneral => "Vice-General",
            PieceKind::AirMarshal => "Air Marshal",
            PieceKind::NavySeal => "Navy Seal",
            PieceKind::Battalion => "Battalion",
            PieceKind::Soldier => "Soldier",
        }
    }

    /// Movement summary for a piece info panel.
    ///
    /// Directions are given from the owner's point of view; east/west are
    /// fixed board directions.
    pub const fn description(self) -> &'static str {
        match self {
            PieceKind::Leader => "Moves one step in any direction.",
            PieceKind::General => {
                "Slides forward, diagonally forward and east. Also takes one step backward."
            }
            PieceKind::ViceGeneral => {
                "Slides backward, diagonally backward, east and west. Also takes one step forward."
            }
            PieceKind::AirMarshal => "Slides along all four diagonals and straight forward.",
            PieceKind::NavySeal => {
                "Jumps exactly two squares diagonally, over any piece in between."
            }
            PieceKind::Battalion => "Slides in straight lines north, south, east and west.",
            PieceKind::Soldier => {
                "One step forward, two from its home row. Captures one step diagonally forward."
            }
        }
    }
}

/// Piece on the board (color + kind)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    #[inline]
    pub const fn is_leader(self) -> bool {
        matches!(self.kind, PieceKind::Leader)
    }
}

/// Two-character cell notation, e.g. `wS`, `bP`
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.prefix(), self.kind.letter())
    }
}
