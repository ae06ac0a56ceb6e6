//! FEN codec.
//!
//! Decodes and encodes the standard six-field textual position record.
//! The fullmove number is read but not preserved; encoding always emits
//! "1" for it.

use std::fmt;
use std::str::FromStr;

use super::error::FenError;
use super::position::{
    BLACK_KINGSIDE, BLACK_QUEENSIDE, EP_SQUARES, TURN, WHITE_KINGSIDE, WHITE_QUEENSIDE,
};
use super::types::{BitSet, Piece, Player, Square};
use super::Position;

impl Position {
    /// Decode a FEN record.
    pub fn decode(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(FenError::TooFewFields {
                found: fields.len(),
            });
        }

        let mut pos = Position::empty();
        pos.set_flags(BitSet::EMPTY);

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadRankCount { found: ranks.len() });
        }
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                } else {
                    let piece =
                        Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let player = if c.is_uppercase() {
                        Player::White
                    } else {
                        Player::Black
                    };
                    if file >= 8 {
                        return Err(FenError::TooManyFiles { rank: rank + 1 });
                    }
                    pos.place(Square::at(file, rank), player, piece);
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::TooManyFiles { rank: rank + 1 });
            }
        }

        let white_kings = pos.kind(Piece::King).inter(pos.whites).count();
        let black_kings = pos.kind(Piece::King).minus(pos.whites).count();
        if white_kings != 1 || black_kings != 1 {
            return Err(FenError::BadKingCount {
                white: white_kings,
                black: black_kings,
            });
        }

        let mut flags = BitSet::EMPTY;
        match fields[1] {
            "w" => flags = flags.union(TURN),
            "b" => {}
            other => {
                return Err(FenError::InvalidActiveColor {
                    found: other.to_string(),
                })
            }
        }

        for c in fields[2].chars() {
            let right = match c {
                'K' => WHITE_KINGSIDE,
                'Q' => WHITE_QUEENSIDE,
                'k' => BLACK_KINGSIDE,
                'q' => BLACK_QUEENSIDE,
                '-' => continue,
                _ => return Err(FenError::InvalidCastling { char: c }),
            };
            // Only grant rights the placement actually supports, so the
            // flag bits stay consistent with king and rook squares.
            if castling_pieces_at_home(&pos, right) {
                flags = flags.union(right);
            }
        }

        if fields[3] != "-" {
            let sq = Square::from_str(fields[3]).map_err(|_| FenError::InvalidEnPassant {
                found: fields[3].to_string(),
            })?;
            if !EP_SQUARES.contains(sq) {
                return Err(FenError::InvalidEnPassant {
                    found: fields[3].to_string(),
                });
            }
            flags = flags.with(sq);
        }

        pos.set_flags(flags);

        if let Some(clock) = fields.get(4) {
            pos.set_halfmove_clock(clock.parse().unwrap_or(0));
        }
        // fields[5], the fullmove number, is informational only

        Ok(pos)
    }

    /// Encode this position as a FEN record. The fullmove number is not
    /// tracked and encodes as "1".
    #[must_use]
    pub fn encode(&self) -> String {
        let mut placement = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_on(Square::at(file, rank)) {
                    Some((player, piece)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(player));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            placement.push(row);
        }

        let mut castling = String::new();
        if self.castling_available(Player::White, true) {
            castling.push('K');
        }
        if self.castling_available(Player::White, false) {
            castling.push('Q');
        }
        if self.castling_available(Player::Black, true) {
            castling.push('k');
        }
        if self.castling_available(Player::Black, false) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} 1",
            placement.join("/"),
            if self.white_to_move() { "w" } else { "b" },
            castling,
            ep,
            self.halfmove_clock()
        )
    }
}

fn castling_pieces_at_home(pos: &Position, right: BitSet) -> bool {
    let (king, rook, player) = if right == WHITE_KINGSIDE {
        (Square::E1, Square::H1, Player::White)
    } else if right == WHITE_QUEENSIDE {
        (Square::E1, Square::A1, Player::White)
    } else if right == BLACK_KINGSIDE {
        (Square::E8, Square::H8, Player::Black)
    } else {
        (Square::E8, Square::A8, Player::Black)
    };
    pos.piece_on(king) == Some((player, Piece::King))
        && pos.piece_on(rook) == Some((player, Piece::Rook))
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::decode(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
