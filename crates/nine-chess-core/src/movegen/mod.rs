//! Pseudo-legal move generation
//!
//! Every generator receives the mover's color as an argument. Nothing in
//! this module reads the side to move from a game state, which is what lets
//! the attack oracle enumerate the opponent's moves on the same board.
//!
//! Moves are produced in a row-major scan of the board, and within one
//! piece in the fixed direction order of its rule table.

mod pieces;
mod sliding;


use smallvec::SmallVec;

use crate::board::Board;
use crate::types::{Color, Move, PieceKind, Square};

/// Move list (most positions have well under 128 pseudo-legal moves)
pub type MoveList = SmallVec<[Move; 128]>;

/// Append the pseudo-legal moves of every `color` piece
pub fn generate_pseudo_legal(board: &Board, color: Color, moves: &mut MoveList) {
    for (from, _) in board.pieces(color) {
        generate_for_square(board, from, color, moves);
    }
}

/// Convenience wrapper returning a fresh list
pub fn pseudo_legal_moves(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    generate_pseudo_legal(board, color, &mut moves);
    moves
}

/// Append the pseudo-legal moves of the piece on `from`.
///
/// Nothing is generated for an empty square or for a piece that does not
/// belong to `color`.
pub fn generate_for_square(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    let Some(piece) = board.piece_on(from) else {
        return;
    };
    if piece.color != color {
        return;
    }

    match piece.kind {
        PieceKind::Leader => pieces::leader_moves(board, from, color, moves),
        PieceKind::General => pieces::general_moves(board, from, color, moves),
        PieceKind::ViceGeneral => pieces::vice_general_moves(board, from, color, moves),
        PieceKind::AirMarshal => pieces::air_marshal_moves(board, from, color, moves),
        PieceKind::NavySeal => pieces::navy_seal_moves(board, from, color, moves),
        PieceKind::Battalion => pieces::battalion_moves(board, from, color, moves),
        PieceKind::Soldier => pieces::soldier_moves(board, from, color, moves),
    }
}
