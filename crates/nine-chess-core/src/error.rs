//! Error types for the rules engine

use crate::types::Move;

/// Errors reported by the public engine boundary
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// `make_move` was given a move that is not in the current legal set
    #[error("illegal move requested: {mv}")]
    IllegalMoveRequested { mv: Move },

    /// Coordinates outside the 9×9 board
    #[error("square ({row},{col}) is off the board")]
    InvalidSquare { row: u8, col: u8 },
}

/// Result type for engine operations
pub type GameResult<T> = Result<T, GameError>;
