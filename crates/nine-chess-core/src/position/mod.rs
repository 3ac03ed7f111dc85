//! Position module
//!
//! `GameState` owns the board, the side to move, both Leader locations and
//! the move log.
//!
//! ## Module Structure
//! - `core` - GameState struct, constructors and queries
//! - `moves` - commit / undo and the checked `make_move` boundary
//! - `legality` - simulate/revert guard, legal move filter, check/checkmate

mod core;
mod legality;
mod moves;


pub use self::core::GameState;
