use super::super::{Board, Color, Square};

impl Board {
    /// Walk each ray, collecting empty squares and at most one capture.
    pub(crate) fn sliding_destinations(
        &self,
        from: Square,
        color: Color,
        dirs: &[(isize, isize)],
    ) -> Vec<Square> {
        let mut dests = Vec::new();
        for &(dr, df) in dirs {
            let mut sq = from;
            while let Some(next) = sq.offset(dr, df) {
                match self.piece_at(next) {
                    None => {
                        dests.push(next);
                        sq = next;
                    }
                    Some((occupant, _)) => {
                        if occupant != color {
                            dests.push(next);
                        }
                        break;
                    }
                }
            }
        }
        dests
    }
}
