//! Move generation.
//!
//! Each piece kind contributes its pseudo-legal destinations; every candidate
//! is then simulated on a cloned board and kept only if the mover's own king
//! is not left in check. Generation is keyed by the color of the piece on the
//! queried square, not by the side to move, so either side can be probed.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack::{DIAGONAL_DIRS, ORTHOGONAL_DIRS};
use super::error::PositionError;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Legal destination squares for the piece on `from`.
    ///
    /// An empty square yields an empty list; that is a normal answer, not an
    /// error.
    pub fn moves_from(&self, from: Square) -> Result<Vec<Square>, PositionError> {
        let Some((color, piece)) = self.piece_at(from) else {
            return Ok(Vec::new());
        };

        let candidates = match piece {
            Piece::Pawn => self.pawn_destinations(from, color),
            Piece::Knight => self.knight_destinations(from, color),
            Piece::Bishop => self.sliding_destinations(from, color, &DIAGONAL_DIRS),
            Piece::Rook => self.sliding_destinations(from, color, &ORTHOGONAL_DIRS),
            Piece::Queen => {
                let mut dests = self.sliding_destinations(from, color, &DIAGONAL_DIRS);
                dests.extend(self.sliding_destinations(from, color, &ORTHOGONAL_DIRS));
                dests
            }
            Piece::King => self.king_destinations(from, color)?,
        };

        let mut legal = Vec::with_capacity(candidates.len());
        for to in candidates {
            if self.is_legal(color, from, to)? {
                legal.push(to);
            }
        }
        Ok(legal)
    }

    /// Whether relocating `from` to `to` leaves the mover's king safe.
    ///
    /// Simulates the relocation on a cloned board; the caller's board is
    /// never touched. A self-move (`from == to`) leaves the board unchanged
    /// and asks whether the mover's king is safe right now, which is how
    /// castling start and transit squares are probed.
    pub(crate) fn is_legal(
        &self,
        mover: Color,
        from: Square,
        to: Square,
    ) -> Result<bool, PositionError> {
        let mut sim = self.clone();
        sim.squares[to.rank()][to.file()] = sim.squares[from.rank()][from.file()];
        if from != to {
            sim.squares[from.rank()][from.file()] = None;
        }
        Ok(!sim.in_check(mover)?)
    }
}
