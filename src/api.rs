//! The FEN-string surface consumed by the UI layer.
//!
//! Positions cross this boundary only as FEN strings and squares only as
//! algebraic notation; callers that want to work with typed values should use
//! [`Board`] directly.
//!
//! # Example
//! ```
//! use chess_rules::api::{apply_move, get_moves};
//!
//! let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
//! let moves = get_moves(start, "g1").unwrap();
//! assert_eq!(moves.len(), 2);
//!
//! let next = apply_move(start, "e2", "e4").unwrap();
//! assert!(next.starts_with("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"));
//! ```

use std::fmt;

use crate::board::{Board, FenError, PositionError, Square, SquareError};

/// Error type for the string-level entry points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed FEN string
    Fen(FenError),
    /// Malformed square notation
    Square(SquareError),
    /// Position violating the engine's input contract
    Position(PositionError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Fen(err) => write!(f, "{err}"),
            ApiError::Square(err) => write!(f, "{err}"),
            ApiError::Position(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<FenError> for ApiError {
    fn from(err: FenError) -> Self {
        ApiError::Fen(err)
    }
}

impl From<SquareError> for ApiError {
    fn from(err: SquareError) -> Self {
        ApiError::Square(err)
    }
}

impl From<PositionError> for ApiError {
    fn from(err: PositionError) -> Self {
        ApiError::Position(err)
    }
}

/// Legal destination squares for the piece on `square`, in generation order.
///
/// An empty square yields an empty list.
pub fn get_moves(fen: &str, square: &str) -> Result<Vec<String>, ApiError> {
    let board = Board::try_from_fen(fen)?;
    let from: Square = square.parse()?;
    let moves = board.moves_from(from)?;
    #[cfg(feature = "logging")]
    log::debug!("{} legal destinations from {from}", moves.len());
    Ok(moves.iter().map(|sq| sq.to_string()).collect())
}

/// The FEN string after moving the piece on `from` to `to`.
///
/// The move is applied as given; checking it against
/// [`get_moves`] first is the caller's responsibility.
pub fn apply_move(fen: &str, from: &str, to: &str) -> Result<String, ApiError> {
    let board = Board::try_from_fen(fen)?;
    let from: Square = from.parse()?;
    let to: Square = to.parse()?;
    #[cfg(feature = "logging")]
    log::trace!("applying {from}{to}");
    Ok(board.apply_move(from, to).to_fen())
}

/// Whether the side to move is currently in check.
pub fn is_in_check(fen: &str) -> Result<bool, ApiError> {
    let board = Board::try_from_fen(fen)?;
    Ok(board.in_check(board.side_to_move())?)
}
