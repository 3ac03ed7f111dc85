//! Step and slide primitives shared by the piece generators

use crate::board::Board;
use crate::types::{Color, Move, Square};

use super::MoveList;

/// True when a `color` piece may land on `to` (empty or enemy-occupied)
#[inline]
fn can_land(board: &Board, to: Square, color: Color) -> bool {
    !matches!(board.piece_on(to), Some(piece) if piece.color == color)
}

/// Single displacement by (`dr`, `dc`); jumps over anything in between
#[inline]
pub(super) fn step(
    board: &Board,
    from: Square,
    color: Color,
    (dr, dc): (i8, i8),
    moves: &mut MoveList,
) {
    if let Some(to) = from.offset(dr, dc) {
        if can_land(board, to, color) {
            moves.push(Move::new(from, to, board));
        }
    }
}

/// Ray in direction (`dr`, `dc`).
///
/// Empty squares are emitted and the walk continues; the first enemy piece
/// is emitted and ends the ray; a friendly piece or the edge ends it without
/// a move.
pub(super) fn slide(
    board: &Board,
    from: Square,
    color: Color,
    (dr, dc): (i8, i8),
    moves: &mut MoveList,
) {
    let mut current = from;
    while let Some(to) = current.offset(dr, dc) {
        match board.piece_on(to) {
            None => moves.push(Move::new(from, to, board)),
            Some(piece) if piece.color != color => {
                moves.push(Move::new(from, to, board));
                break;
            }
            Some(_) => break,
        }
        current = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, PieceKind};

    fn destinations(moves: &MoveList) -> Vec<Square> {
        moves.iter().map(|m| m.to()).collect()
    }

    #[test]
    fn test_slide_stops_at_edge() {
        let mut board = Board::empty();
        let from = Square::new(4, 4);
        board.put_piece(from, Piece::new(Color::White, PieceKind::Battalion));

        let mut moves = MoveList::new();
        slide(&board, from, Color::White, (0, 1), &mut moves);
        assert_eq!(
            destinations(&moves),
            vec![Square::new(4, 5), Square::new(4, 6), Square::new(4, 7), Square::new(4, 8)]
        );
    }

    #[test]
    fn test_slide_captures_first_enemy_and_stops() {
        let mut board = Board::empty();
        let from = Square::new(4, 4);
        board.put_piece(from, Piece::new(Color::White, PieceKind::Battalion));
        board.put_piece(Square::new(4, 6), Piece::new(Color::Black, PieceKind::Soldier));
        board.put_piece(Square::new(4, 7), Piece::new(Color::Black, PieceKind::Soldier));

        let mut moves = MoveList::new();
        slide(&board, from, Color::White, (0, 1), &mut moves);
        assert_eq!(destinations(&moves), vec![Square::new(4, 5), Square::new(4, 6)]);
        assert!(moves[1].is_capture());
    }

    #[test]
    fn test_slide_stops_before_friend() {
        let mut board = Board::empty();
        let from = Square::new(4, 4);
        board.put_piece(from, Piece::new(Color::White, PieceKind::Battalion));
        board.put_piece(Square::new(4, 5), Piece::new(Color::White, PieceKind::Soldier));

        let mut moves = MoveList::new();
        slide(&board, from, Color::White, (0, 1), &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_step_never_lands_on_friend() {
        let mut board = Board::empty();
        let from = Square::new(4, 4);
        board.put_piece(from, Piece::new(Color::Black, PieceKind::Leader));
        board.put_piece(Square::new(5, 4), Piece::new(Color::Black, PieceKind::Soldier));
        board.put_piece(Square::new(3, 4), Piece::new(Color::White, PieceKind::Soldier));

        let mut moves = MoveList::new();
        step(&board, from, Color::Black, (1, 0), &mut moves);
        assert!(moves.is_empty());
        step(&board, from, Color::Black, (-1, 0), &mut moves);
        assert_eq!(destinations(&moves), vec![Square::new(3, 4)]);
        step(&board, Square::new(0, 0), Color::Black, (-1, 0), &mut moves);
        assert_eq!(moves.len(), 1);
    }
}
