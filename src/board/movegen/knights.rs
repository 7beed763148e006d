use super::super::attack::KNIGHT_OFFSETS;
use super::super::{Board, Color, Square};

impl Board {
    pub(crate) fn knight_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        let mut dests = Vec::new();
        for &(dr, df) in &KNIGHT_OFFSETS {
            if let Some(to) = from.offset(dr, df) {
                match self.piece_at(to) {
                    Some((occupant, _)) if occupant == color => {}
                    _ => dests.push(to),
                }
            }
        }
        dests
    }
}
