use super::super::{Board, Color, Square};

impl Board {
    pub(crate) fn pawn_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        let mut dests = Vec::new();
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                dests.push(forward);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.is_empty(double) {
                            dests.push(double);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(to) = from.offset(dir, df) {
                if let Some((occupant, _)) = self.piece_at(to) {
                    if occupant != color {
                        dests.push(to);
                    }
                }
            }
        }

        // En passant: the recorded target must be one step diagonally ahead
        if let Some(target) = self.en_passant_target {
            if target.rank() as isize == from.rank() as isize + dir
                && target.file().abs_diff(from.file()) == 1
            {
                dests.push(target);
            }
        }

        dests
    }
}
