pub mod api;
pub mod board;

pub use api::{apply_move, get_moves, is_in_check, ApiError};
pub use board::{Board, CastlingRights, Color, Piece, Square};
