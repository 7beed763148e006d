//! Chess board representation and rule logic.
//!
//! The board is an owned 8x8 grid plus the five FEN metadata fields, treated
//! as an immutable value: move generation, check detection, and move
//! application all return fresh values and never mutate their input.
//!
//! # Example
//! ```
//! use chess_rules::board::Board;
//!
//! let board = Board::new();
//! let moves = board.moves_from("e2".parse().unwrap()).unwrap();
//! assert_eq!(moves.len(), 2);
//! ```

mod apply;
mod attack;
mod error;
mod fen;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, PositionError, SquareError};
pub use state::Board;
pub use types::{CastlingRights, Color, Piece, Square};
