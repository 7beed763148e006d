//! Check detection.
//!
//! Attacks on a square are found by scanning outward from it: along the four
//! orthogonal rays for rooks and queens, the four diagonal rays for bishops
//! and queens, the eight knight offsets, and the two squares an enemy pawn
//! would capture from.

use super::error::PositionError;
use super::{Board, Color, Piece, Square};

pub(crate) const ORTHOGONAL_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const DIAGONAL_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl Board {
    /// Whether the given color's king is currently attacked.
    ///
    /// Independent of whose turn it is, so either side can be probed.
    pub fn in_check(&self, color: Color) -> Result<bool, PositionError> {
        let king = self
            .find_king(color)
            .ok_or(PositionError::KingMissing { color })?;
        Ok(self.is_attacked(king, color.opponent()))
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                if self.piece_at(sq) == Some((color, Piece::King)) {
                    return Some(sq);
                }
            }
        }
        None
    }

    /// Whether `attacker` has any piece bearing on `square`.
    pub(crate) fn is_attacked(&self, square: Square, attacker: Color) -> bool {
        for &(dr, df) in &ORTHOGONAL_DIRS {
            if let Some((color, piece)) = self.first_piece_along(square, dr, df) {
                if color == attacker && piece.attacks_straight() {
                    return true;
                }
            }
        }

        for &(dr, df) in &DIAGONAL_DIRS {
            if let Some((color, piece)) = self.first_piece_along(square, dr, df) {
                if color == attacker && piece.attacks_diagonally() {
                    return true;
                }
            }
        }

        for &(dr, df) in &KNIGHT_OFFSETS {
            if let Some(sq) = square.offset(dr, df) {
                if self.piece_at(sq) == Some((attacker, Piece::Knight)) {
                    return true;
                }
            }
        }

        // Pawns capture toward their own forward direction
        let dir = attacker.pawn_direction();
        for df in [-1, 1] {
            if let Some(sq) = square.offset(-dir, df) {
                if self.piece_at(sq) == Some((attacker, Piece::Pawn)) {
                    return true;
                }
            }
        }

        false
    }

    /// The first occupied square walking from `from` in the given direction.
    fn first_piece_along(&self, from: Square, dr: isize, df: isize) -> Option<(Color, Piece)> {
        let mut sq = from.offset(dr, df)?;
        loop {
            if let Some(occupant) = self.piece_at(sq) {
                return Some(occupant);
            }
            sq = sq.offset(dr, df)?;
        }
    }
}
