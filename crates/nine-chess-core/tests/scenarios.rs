//! Rule scenarios through the public API

use nine_chess_core::attacks::square_under_attack;
use nine_chess_core::{Board, Color, GameError, GameState, Move, Piece, PieceKind, Square};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

#[test]
fn test_opening_soldier_has_two_destinations() {
    let mut state = GameState::new();
    let targets: Vec<_> = state
        .legal_moves()
        .iter()
        .filter(|m| m.from() == sq(7, 4))
        .map(|m| m.to())
        .collect();
    assert_eq!(targets, vec![sq(6, 4), sq(5, 4)]);
}

#[test]
fn test_two_leaders_attack_range() {
    let mut board = Board::empty();
    board.put_piece(sq(4, 4), Piece::new(Color::White, PieceKind::Leader));
    board.put_piece(sq(4, 6), Piece::new(Color::Black, PieceKind::Leader));

    assert!(square_under_attack(&board, sq(4, 5), Color::White));
    assert!(!square_under_attack(&board, sq(4, 7), Color::White));
}

#[test]
fn test_battalion_on_open_rank_checks_leader() {
    let mut board = Board::empty();
    board.put_piece(sq(4, 4), Piece::new(Color::Black, PieceKind::Battalion));
    board.put_piece(sq(4, 8), Piece::new(Color::White, PieceKind::Leader));
    assert!(square_under_attack(&board, sq(4, 8), Color::Black));

    let mut state = GameState::from_board(board, Color::White);
    let moves = state.legal_moves();
    assert!(!moves.is_empty());
    for mv in &moves {
        assert_ne!(mv.to().row(), 4, "{mv} keeps the Leader on the attacked rank");
    }
}

#[test]
fn test_short_game_to_checkmate() {
    // back-rank mate: the White Leader is walled in by its own Soldiers
    let mut board = Board::empty();
    board.put_piece(sq(8, 4), Piece::new(Color::White, PieceKind::Leader));
    board.put_piece(sq(7, 3), Piece::new(Color::White, PieceKind::Soldier));
    board.put_piece(sq(7, 4), Piece::new(Color::White, PieceKind::Soldier));
    board.put_piece(sq(7, 5), Piece::new(Color::White, PieceKind::Soldier));
    board.put_piece(sq(0, 4), Piece::new(Color::Black, PieceKind::Leader));
    board.put_piece(sq(2, 0), Piece::new(Color::Black, PieceKind::Battalion));
    let mut state = GameState::from_board(board, Color::Black);

    let mate = Move::new(sq(2, 0), sq(8, 0), state.board());
    assert!(state.legal_moves().contains(&mate));
    state.make_move(mate).unwrap();

    assert!(state.is_in_check());
    assert!(state.legal_moves().is_empty());
    assert!(state.is_checkmate());

    state.undo_move();
    assert!(!state.is_checkmate());
    assert_eq!(state.board().piece_on(sq(2, 0)), Some(Piece::new(Color::Black, PieceKind::Battalion)));
}

#[test]
fn test_illegal_request_is_reported() {
    let mut state = GameState::new();
    let mv = Move::new(sq(8, 4), sq(7, 4), state.board());
    match state.make_move(mv) {
        Err(GameError::IllegalMoveRequested { mv: rejected }) => assert_eq!(rejected, mv),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn test_replay_from_move_log() {
    let mut state = GameState::new();
    for (from, to) in [((7, 4), (5, 4)), ((1, 3), (3, 3)), ((8, 1), (6, 3)), ((0, 1), (2, 3))] {
        let mv = Move::new(sq(from.0, from.1), sq(to.0, to.1), state.board());
        state.make_move(mv).unwrap();
    }
    let log = state.move_log().to_vec();

    let mut replay = GameState::new();
    for mv in log {
        replay.make_move(mv).unwrap();
    }
    assert_eq!(replay.board(), state.board());
    assert_eq!(replay.side_to_move(), state.side_to_move());
}

#[test]
fn test_move_serializes_as_coordinates() {
    let board = Board::startpos();
    let mv = Move::new(sq(7, 4), sq(6, 4), &board);
    let json = serde_json::to_string(&mv).unwrap();
    assert!(json.contains("\"from\":[7,4]"), "{json}");

    let back: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mv);
    assert_eq!(back.piece_moved(), mv.piece_moved());

    let off_board = r#"{"from":[9,0],"to":[0,0],"piece_moved":null,"piece_captured":null}"#;
    assert!(serde_json::from_str::<Move>(off_board).is_err());
}
