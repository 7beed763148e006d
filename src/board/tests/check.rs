//! Check detection scans.

use crate::board::{Board, Color, PositionError};

fn in_check(fen: &str, color: Color) -> bool {
    Board::try_from_fen(fen).unwrap().in_check(color).unwrap()
}

#[test]
fn test_start_position_not_in_check() {
    let board = Board::new();
    assert!(!board.in_check(Color::White).unwrap());
    assert!(!board.in_check(Color::Black).unwrap());
}

#[test]
fn test_diagonal_queen_check() {
    // The f2 pawn is gone and the queen looks down the h4-e1 diagonal
    let fen = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3";
    assert!(in_check(fen, Color::White));
    assert!(!in_check(fen, Color::Black));
}

#[test]
fn test_orthogonal_rook_check() {
    assert!(in_check("4k3/4r3/8/8/8/8/8/4K3 w - - 0 1", Color::White));
}

#[test]
fn test_blocked_slider_is_no_check() {
    assert!(!in_check("4k3/8/8/4r3/8/4B3/8/4K3 w - - 0 1", Color::White));
}

#[test]
fn test_knight_check() {
    assert!(in_check("4k3/8/8/8/8/5n2/8/4K3 w - - 0 1", Color::White));
}

#[test]
fn test_pawn_check_direction_depends_on_king_color() {
    assert!(in_check("4k3/8/8/3p4/4K3/8/8/8 w - - 0 1", Color::White));
    assert!(in_check("4k3/3P4/8/8/8/8/8/4K3 b - - 0 1", Color::Black));
    // A pawn never gives check from behind
    assert!(!in_check("4k3/8/8/8/4K3/3p4/8/8 w - - 0 1", Color::White));
}

#[test]
fn test_adjacent_kings_are_not_reported() {
    let fen = "8/8/8/3kK3/8/8/8/8 w - - 0 1";
    assert!(!in_check(fen, Color::White));
    assert!(!in_check(fen, Color::Black));
}

#[test]
fn test_missing_king_is_an_error() {
    let board = Board::try_from_fen("4k3/8/8/8/8/8/8/8 w - - 0 1").unwrap();
    assert!(matches!(
        board.in_check(Color::White),
        Err(PositionError::KingMissing {
            color: Color::White
        })
    ));
    assert_eq!(board.in_check(Color::Black), Ok(false));
}
