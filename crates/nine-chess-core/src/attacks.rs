//! Attack detection
//!
//! A square is attacked by a side when one of that side's pseudo-legal moves
//! lands on it. Soldiers therefore only attack a diagonal square that holds
//! an enemy piece, which is the only case that matters for check.
//!
//! These functions take a plain `&Board` and the attacking color; they have
//! no access to turn state.

use crate::board::Board;
use crate::movegen::{generate_for_square, generate_pseudo_legal, MoveList};
use crate::types::{Color, Square};

/// True when any pseudo-legal move of `by` ends on `sq`
pub fn square_under_attack(board: &Board, sq: Square, by: Color) -> bool {
    let mut moves = MoveList::new();
    generate_pseudo_legal(board, by, &mut moves);
    moves.iter().any(|m| m.to() == sq)
}

/// Origin squares of the `by` pieces attacking `sq`, row-major
pub fn attackers_of(board: &Board, sq: Square, by: Color) -> Vec<Square> {
    let mut attackers = Vec::new();
    let mut moves = MoveList::new();
    for (from, _) in board.pieces(by) {
        moves.clear();
        generate_for_square(board, from, by, &mut moves);
        if moves.iter().any(|m| m.to() == sq) {
            attackers.push(from);
        }
    }
    attackers
}
