//! # nine-chess-core
//!
//! Rules engine for a 9×9 chess variant with seven piece kinds.
//!
//! ## Module layout
//!
//! - `types`: value types (Color, Square, PieceKind, Piece, Move)
//! - `board`: the 9×9 grid and the canonical start layout
//! - `movegen`: pseudo-legal move generation, one generator per piece kind
//! - `attacks`: attack detection for a square against one side
//! - `position`: game state, legality filtering, check/checkmate, commit/undo
//! - `session`: move record with a redo cursor and the game outcome
//! - `error`: error types
//!

pub mod error;
pub mod types;

pub mod board;

pub mod attacks;
pub mod movegen;

pub mod position;
pub mod session;

pub use board::Board;
pub use error::{GameError, GameResult};
pub use movegen::MoveList;
pub use position::GameState;
pub use session::{Outcome, Session};
pub use types::{Color, Move, Piece, PieceKind, Square};
