use super::super::error::PositionError;
use super::super::{Board, Color, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, -1),
    (-1, 0),
];

impl Board {
    pub(crate) fn king_destinations(
        &self,
        from: Square,
        color: Color,
    ) -> Result<Vec<Square>, PositionError> {
        let mut dests = Vec::new();
        for &(dr, df) in &KING_OFFSETS {
            if let Some(to) = from.offset(dr, df) {
                match self.piece_at(to) {
                    Some((occupant, _)) if occupant == color => {}
                    _ => dests.push(to),
                }
            }
        }

        // Castling. The rights field is trusted: a recorded right implies the
        // rook is still on its home corner.
        let back = color.back_rank();
        if from == Square(back, 4) {
            if self.castling_rights.has(color, true)
                && self.is_empty(Square(back, 5))
                && self.is_empty(Square(back, 6))
                && self.castle_path_safe(color, from, &[Square(back, 5), Square(back, 6)])?
            {
                dests.push(Square(back, 6));
            }
            if self.castling_rights.has(color, false)
                && self.is_empty(Square(back, 1))
                && self.is_empty(Square(back, 2))
                && self.is_empty(Square(back, 3))
                && self.castle_path_safe(color, from, &[Square(back, 3), Square(back, 2)])?
            {
                dests.push(Square(back, 2));
            }
        }

        Ok(dests)
    }

    /// The king may not castle out of, through, or into an attacked square.
    fn castle_path_safe(
        &self,
        color: Color,
        king: Square,
        path: &[Square],
    ) -> Result<bool, PositionError> {
        if !self.is_legal(color, king, king)? {
            return Ok(false);
        }
        for &sq in path {
            if !self.is_legal(color, king, sq)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
