//! End-to-end tests over the FEN-string surface.

use chess_rules::api::{apply_move, get_moves, is_in_check, ApiError};

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn sorted(mut moves: Vec<String>) -> Vec<String> {
    moves.sort();
    moves
}

#[test]
fn test_start_knights_have_exactly_two_destinations() {
    for square in ["b1", "g1", "b8", "g8"] {
        assert_eq!(get_moves(START, square).unwrap().len(), 2, "{square}");
    }
    assert_eq!(sorted(get_moves(START, "b1").unwrap()), ["a3", "c3"]);
}

#[test]
fn test_empty_square_yields_empty_list() {
    assert_eq!(get_moves(START, "e5").unwrap(), Vec::<String>::new());
}

#[test]
fn test_en_passant_target_is_offered() {
    let fen = "rnbqkbnr/pp1ppppp/8/8/1Pp5/8/P1PPPPPP/RNBQKBNR b - b3 0 1";
    assert!(get_moves(fen, "c4").unwrap().contains(&"b3".to_string()));
}

#[test]
fn test_castling_offered_on_both_wings() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
    let white = get_moves(fen, "e1").unwrap();
    assert!(white.contains(&"g1".to_string()));
    assert!(white.contains(&"c1".to_string()));
    let black = get_moves(fen, "e8").unwrap();
    assert!(black.contains(&"g8".to_string()));
    assert!(black.contains(&"c8".to_string()));
}

#[test]
fn test_castling_through_attacked_square_refused() {
    let fen = "r4rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1";
    let moves = get_moves(fen, "e1").unwrap();
    assert!(!moves.contains(&"g1".to_string()));
    assert!(moves.contains(&"c1".to_string()));
}

#[test]
fn test_self_check_moves_are_filtered() {
    let fen = "4k3/8/8/8/4r3/8/4R3/4K3 w - - 0 1";
    assert_eq!(sorted(get_moves(fen, "e2").unwrap()), ["e3", "e4"]);
}

#[test]
fn test_apply_move_double_step() {
    assert_eq!(
        apply_move(START, "e2", "e4").unwrap(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}

#[test]
fn test_generated_moves_apply_cleanly() {
    let mut fen = START.to_string();
    for (from, to) in [("e2", "e4"), ("c7", "c5"), ("g1", "f3"), ("d7", "d6")] {
        assert!(get_moves(&fen, from).unwrap().contains(&to.to_string()));
        fen = apply_move(&fen, from, to).unwrap();
        assert!(!is_in_check(&fen).unwrap());
    }
    assert_eq!(
        fen,
        "rnbqkbnr/pp2pppp/3p4/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 3"
    );
}

#[test]
fn test_is_in_check_reports_side_to_move_only() {
    assert!(!is_in_check(START).unwrap());
    // White is to move and under attack from the h4 queen
    assert!(is_in_check("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3").unwrap());
    // Black stands in check here, but it is White's turn
    assert!(!is_in_check("4k3/4R3/8/8/8/8/8/4K3 w - - 0 1").unwrap());
}

#[test]
fn test_invalid_square_notation_rejected() {
    assert!(matches!(get_moves(START, "z9"), Err(ApiError::Square(_))));
    assert!(matches!(apply_move(START, "e2", "e9"), Err(ApiError::Square(_))));
}

#[test]
fn test_malformed_fen_rejected() {
    assert!(matches!(get_moves("not a fen", "e2"), Err(ApiError::Fen(_))));
    assert!(matches!(is_in_check("8/8/8 w - - 0 1"), Err(ApiError::Fen(_))));
}

#[test]
fn test_position_without_king_rejected() {
    let fen = "8/8/8/8/8/8/8/R7 w - - 0 1";
    assert!(matches!(get_moves(fen, "a1"), Err(ApiError::Position(_))));
    assert!(matches!(is_in_check(fen), Err(ApiError::Position(_))));
}
