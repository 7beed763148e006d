use std::str::FromStr;

use super::error::FenError;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Parse a position from FEN notation.
    ///
    /// Expects all six fields: placement, side to move, castling rights,
    /// en passant target, halfmove clock, fullmove number.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        // Piece placement, rank 8 first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= 8 {
                        return Err(FenError::BadRankWidth {
                            rank: (*rank_str).to_string(),
                        });
                    }
                    board.set_piece(Square(rank, file), color, piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::BadRankWidth {
                    rank: (*rank_str).to_string(),
                });
            }
        }

        // Side to move
        match parts[1] {
            "w" => board.white_to_move = true,
            "b" => board.white_to_move = false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }

        // Castling rights
        for c in parts[2].chars() {
            match c {
                'K' => board.castling_rights.set(Color::White, true),
                'Q' => board.castling_rights.set(Color::White, false),
                'k' => board.castling_rights.set(Color::Black, true),
                'q' => board.castling_rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        // En passant target
        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let sq = parts[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            Some(sq)
        };

        // Move counters
        board.halfmove_clock =
            parts[4].parse().map_err(|_| FenError::InvalidHalfmoveClock {
                found: parts[4].to_string(),
            })?;
        board.fullmove_number =
            parts[5].parse().map_err(|_| FenError::InvalidFullmoveNumber {
                found: parts[5].to_string(),
            })?;
        if board.fullmove_number == 0 {
            return Err(FenError::InvalidFullmoveNumber {
                found: parts[5].to_string(),
            });
        }

        Ok(board)
    }

    /// Render the position as a FEN string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let mut castling = String::new();
        for (color, kingside, letter) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling_rights.has(color, kingside) {
                castling.push(letter);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
