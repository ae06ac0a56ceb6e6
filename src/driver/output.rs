//! CECP output formatting.
//!
//! Thinking output format: `<depth> <score> <time> <nodes> <pv>` with the
//! time in centiseconds and the PV in long algebraic notation.

use crate::board::Move;
use crate::search::Variation;

/// The feature line emitted after `protover`.
#[must_use]
pub fn format_features() -> String {
    concat!(
        "feature myname=\"Moxie 0.1\" ping=0 setboard=1 playother=1 usermove=1 ",
        "draw=0 sigint=0 analyze=1 variants=\"normal\" colors=0 nps=0 debug=1 ",
        "memory=0 smp=1 done=1"
    )
    .to_string()
}

/// A committed move.
#[must_use]
pub fn format_move(mv: &Move) -> String {
    format!("move {mv}")
}

/// A thinking progress line.
#[must_use]
pub fn format_thinking(variation: &Variation, score: i32, centis: u64) -> String {
    let pv = variation
        .moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{} {} {} {} {}",
        variation.depth, score, centis, variation.nodes, pv
    )
}

/// A game result with its reason, e.g. `1-0 {White mates}`.
#[must_use]
pub fn format_result(result: &str, reason: &str) -> String {
    format!("{result} {{{reason}}}")
}

/// A protocol error line.
#[must_use]
pub fn format_error(kind: &str, command: &str) -> String {
    format!("Error ({kind}): {command}")
}

/// The reply to an illegal `usermove`.
#[must_use]
pub fn format_illegal_move(notation: &str) -> String {
    format!("Illegal move: '{notation}'")
}

/// A comment line, ignored by GUIs.
#[must_use]
pub fn format_comment(text: &str) -> String {
    format!("# {text}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, Player, Position};

    #[test]
    fn test_features_line() {
        let features = format_features();
        assert!(features.starts_with("feature myname="));
        assert!(features.contains("setboard=1"));
        assert!(features.contains("usermove=1"));
        assert!(features.contains("variants=\"normal\""));
        assert!(features.ends_with("done=1"));
    }

    #[test]
    fn test_format_move() {
        let pos = Position::initial();
        let mv = pos.parse_move("e2e4").unwrap();
        assert_eq!(format_move(&mv), "move e2e4");
    }

    #[test]
    fn test_format_thinking() {
        let pos = Position::initial();
        let variation = Variation {
            moves: vec![pos.parse_move("e2e4").unwrap()],
            score: 24,
            nodes: 12345,
            depth: 5,
        };
        assert_eq!(format_thinking(&variation, 24, 142), "5 24 142 12345 e2e4");
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result("1-0", "White mates"), "1-0 {White mates}");
        assert_eq!(format_result("1/2-1/2", "Stalemate"), "1/2-1/2 {Stalemate}");
    }

    #[test]
    fn test_format_error() {
        assert_eq!(
            format_error("unknown command", "frobnicate"),
            "Error (unknown command): frobnicate"
        );
    }

    #[test]
    fn test_format_illegal_move() {
        assert_eq!(format_illegal_move("e2e5"), "Illegal move: 'e2e5'");
    }

    #[test]
    fn test_format_comment() {
        assert_eq!(format_comment("hello"), "# hello");
    }

    #[test]
    fn test_promotion_in_pv() {
        let pos = Position::decode("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let mv = pos.parse_move("a7a8q").unwrap();
        assert_eq!(mv.promote, Some(Piece::Queen));
        assert_eq!(mv.player, Player::White);
        assert_eq!(format_move(&mv), "move a7a8q");
    }
}
