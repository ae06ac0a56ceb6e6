//! Move type and the long-algebraic codec.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, Player};
use super::square::Square;

/// A single chess move. Equality is structural.
///
/// `promote` is `None` except when a pawn reaches its last rank, in which
/// case it is one of queen, rook, bishop or knight.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub player: Player,
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub promote: Option<Piece>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(player: Player, piece: Piece, from: Square, to: Square) -> Self {
        Move {
            player,
            piece,
            from,
            to,
            promote: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn promotion(
        player: Player,
        from: Square,
        to: Square,
        promote: Piece,
    ) -> Self {
        Move {
            player,
            piece: Piece::Pawn,
            from,
            to,
            promote: Some(promote),
        }
    }

    /// True for king moves that travel two files (the castling encoding).
    #[inline]
    #[must_use]
    pub fn is_castling(self) -> bool {
        self.piece == Piece::King && self.from.file().abs_diff(self.to.file()) == 2
    }

    /// True for pawn moves that travel two ranks.
    #[inline]
    #[must_use]
    pub fn is_double_push(self) -> bool {
        self.piece == Piece::Pawn && self.from.rank().abs_diff(self.to.rank()) == 2
    }
}

impl fmt::Display for Move {
    /// Long algebraic notation: `e2e4`, `e7e8q`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(p) = self.promote {
            write!(f, "{}", p.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_plain() {
        let mv = Move::new(Player::White, Piece::Pawn, Square::at(4, 1), Square::at(4, 3));
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn test_display_promotion() {
        let mv = Move::promotion(Player::White, Square::at(4, 6), Square::at(4, 7), Piece::Queen);
        assert_eq!(mv.to_string(), "e7e8q");
    }

    #[test]
    fn test_castling_shape() {
        let castle = Move::new(Player::White, Piece::King, Square::E1, Square::G1);
        assert!(castle.is_castling());
        let step = Move::new(Player::White, Piece::King, Square::E1, Square::F1);
        assert!(!step.is_castling());
    }

    #[test]
    fn test_double_push_shape() {
        let double = Move::new(Player::White, Piece::Pawn, Square::at(4, 1), Square::at(4, 3));
        assert!(double.is_double_push());
        let single = Move::new(Player::White, Piece::Pawn, Square::at(4, 1), Square::at(4, 2));
        assert!(!single.is_double_push());
    }

    #[test]
    fn test_structural_equality() {
        let a = Move::new(Player::White, Piece::Knight, Square::at(6, 0), Square::at(5, 2));
        let b = Move::new(Player::White, Piece::Knight, Square::at(6, 0), Square::at(5, 2));
        assert_eq!(a, b);
    }
}
