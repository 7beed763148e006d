//! State transition: relocate a piece and update the metadata fields.

use super::{Board, Color, Piece, Square};

impl Board {
    /// Produce the successor position for moving the piece on `from` to `to`.
    ///
    /// Resolves en passant capture and castling rook relocation, and updates
    /// castling rights, the en passant target, the move counters, and the
    /// side to move. The input position is left untouched.
    ///
    /// `(from, to)` is assumed to have come out of
    /// [`moves_from`](Board::moves_from); nothing is validated here, and an
    /// arbitrary relocation produces an arbitrary position.
    #[must_use]
    pub fn apply_move(&self, from: Square, to: Square) -> Board {
        let mut next = self.clone();
        let moved = self.piece_at(from);
        let captured = self.piece_at(to);

        next.squares[to.rank()][to.file()] = moved;
        next.squares[from.rank()][from.file()] = None;

        match moved {
            Some((color, Piece::Pawn)) => {
                // A diagonal pawn move onto an empty square is en passant;
                // the passed pawn sits one rank behind the destination
                if from.file() != to.file() && captured.is_none() {
                    if let Some(behind) = to.offset(-color.pawn_direction(), 0) {
                        next.squares[behind.rank()][behind.file()] = None;
                    }
                }
            }
            Some((color, Piece::King)) => {
                let back = color.back_rank();
                if from.file().abs_diff(to.file()) == 2 {
                    // Castling: bring the rook to the king's near side
                    if to == Square(back, 6) && self.castling_rights.has(color, true) {
                        next.squares[back][5] = next.squares[back][7].take();
                    } else if to == Square(back, 2) && self.castling_rights.has(color, false) {
                        next.squares[back][3] = next.squares[back][0].take();
                    }
                }
                next.castling_rights.remove(color, true);
                next.castling_rights.remove(color, false);
            }
            Some((color, Piece::Rook)) => {
                let back = color.back_rank();
                if from == Square(back, 0) {
                    next.castling_rights.remove(color, false);
                } else if from == Square(back, 7) {
                    next.castling_rights.remove(color, true);
                }
            }
            _ => {}
        }

        let pawn_move = matches!(moved, Some((_, Piece::Pawn)));
        next.halfmove_clock = if pawn_move || captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };

        next.en_passant_target = match moved {
            Some((color, Piece::Pawn)) if from.rank().abs_diff(to.rank()) == 2 => {
                from.offset(color.pawn_direction(), 0)
            }
            _ => None,
        };

        next.white_to_move = !self.white_to_move;
        if !self.white_to_move {
            next.fullmove_number = self.fullmove_number + 1;
        }

        next
    }
}
