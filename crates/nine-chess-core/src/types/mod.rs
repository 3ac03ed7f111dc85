//! Basic types
//!
//! # Type dependencies
//!
//! ```text
//! Color   Square
//!   ↓       ↓
//! PieceKind ↓
//!   ↓       ↓
//! Piece → Move
//! ```

mod color;
mod moves;
mod piece;
mod square;

pub use color::Color;
pub use moves::Move;
pub use piece::{Piece, PieceKind};
pub use square::Square;
