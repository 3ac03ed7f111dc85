//! Movement rules of the seven piece kinds
//!
//! Two kinds of delta tables are used:
//! - board deltas `(dr, dc)` for the symmetric pieces (Leader, Navy Seal,
//!   Battalion), identical for both colors;
//! - relative deltas `(forward, east)` for the pieces whose pattern depends
//!   on the owner's facing. "Forward" is mirrored per color by
//!   [`Color::forward`], east/west are fixed board directions.

use crate::board::Board;
use crate::types::{Color, Move, Square};

use super::sliding::{slide, step};
use super::MoveList;

/// Board delta (row, col)
type BoardDelta = (i8, i8);

/// Owner-relative delta (forward, east)
type RelDelta = (i8, i8);

const LEADER_STEPS: [BoardDelta; 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

const NAVY_SEAL_JUMPS: [BoardDelta; 4] = [(-2, 2), (2, 2), (2, -2), (-2, -2)];

const BATTALION_RAYS: [BoardDelta; 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// Forward, forward-east, forward-west, east
const GENERAL_RAYS: [RelDelta; 4] = [(1, 0), (1, 1), (1, -1), (0, 1)];
const GENERAL_STEP: RelDelta = (-1, 0);

/// Backward, backward-east, backward-west, east, west
const VICE_GENERAL_RAYS: [RelDelta; 5] = [(-1, 0), (-1, 1), (-1, -1), (0, 1), (0, -1)];
const VICE_GENERAL_STEP: RelDelta = (1, 0);

/// Forward-east, backward-east, forward, forward-west, backward-west
const AIR_MARSHAL_RAYS: [RelDelta; 5] = [(1, 1), (-1, 1), (1, 0), (1, -1), (-1, -1)];

/// Convert an owner-relative delta into a board delta
#[inline]
fn orient(color: Color, (forward, east): RelDelta) -> BoardDelta {
    (forward * color.forward(), east)
}

pub(super) fn leader_moves(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    for delta in LEADER_STEPS {
        step(board, from, color, delta, moves);
    }
}

pub(super) fn general_moves(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    for delta in GENERAL_RAYS {
        slide(board, from, color, orient(color, delta), moves);
    }
    step(board, from, color, orient(color, GENERAL_STEP), moves);
}

pub(super) fn vice_general_moves(
    board: &Board,
    from: Square,
    color: Color,
    moves: &mut MoveList,
) {
    for delta in VICE_GENERAL_RAYS {
        slide(board, from, color, orient(color, delta), moves);
    }
    step(board, from, color, orient(color, VICE_GENERAL_STEP), moves);
}

pub(super) fn air_marshal_moves(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    for delta in AIR_MARSHAL_RAYS {
        slide(board, from, color, orient(color, delta), moves);
    }
}

pub(super) fn navy_seal_moves(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    for delta in NAVY_SEAL_JUMPS {
        step(board, from, color, delta, moves);
    }
}

pub(super) fn battalion_moves(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    for delta in BATTALION_RAYS {
        slide(board, from, color, delta, moves);
    }
}

/// Soldier: quiet advance (two squares from the home row when both are
/// empty) and diagonal-forward capture onto an enemy piece only
pub(super) fn soldier_moves(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    let forward = color.forward();

    if let Some(one) = from.offset(forward, 0) {
        if board.is_empty(one) {
            moves.push(Move::new(from, one, board));
            if from.row() == color.home_row() {
                if let Some(two) = one.offset(forward, 0) {
                    if board.is_empty(two) {
                        moves.push(Move::new(from, two, board));
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(to) = from.offset(forward, dc) {
            if matches!(board.piece_on(to), Some(piece) if piece.color != color) {
                moves.push(Move::new(from, to, board));
            }
        }
    }
}
