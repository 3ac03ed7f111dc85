//! Leaf counting over the legal-move tree
//!
//! Every node plays its moves through `make_move` and takes them back with
//! `undo_move`, so a count that matches the reference also exercises the
//! commit/undo round trip.

use nine_chess_core::{GameResult, GameState, Move};

/// Number of leaf nodes `depth` plies below the current position
pub fn perft(state: &mut GameState, depth: u32) -> GameResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = state.legal_moves();
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for mv in moves {
        state.make_move(mv)?;
        let sub = perft(state, depth - 1);
        state.undo_move();
        nodes += sub?;
    }
    Ok(nodes)
}

/// Per-root-move leaf counts, in generation order
pub fn divide(state: &mut GameState, depth: u32) -> GameResult<Vec<(Move, u64)>> {
    let mut counts = Vec::new();
    if depth == 0 {
        return Ok(counts);
    }

    for mv in state.legal_moves() {
        state.make_move(mv)?;
        let sub = perft(state, depth - 1);
        state.undo_move();
        counts.push((mv, sub?));
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nine_chess_core::Board;

    #[test]
    fn test_perft_startpos() {
        let mut state = GameState::new();
        assert_eq!(perft(&mut state, 0).unwrap(), 1);
        assert_eq!(perft(&mut state, 1).unwrap(), 20);
        assert_eq!(perft(&mut state, 2).unwrap(), 400);
        assert_eq!(state.board(), &Board::startpos());
        assert!(state.move_log().is_empty());
    }

    #[test]
    fn test_divide_sums_to_perft() {
        let mut state = GameState::new();
        let counts = divide(&mut state, 2).unwrap();
        assert_eq!(counts.len(), 20);
        assert!(counts.iter().all(|(_, n)| *n == 20));

        let total: u64 = counts.iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&mut state, 2).unwrap());
    }
}
