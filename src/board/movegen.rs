//! Move generation.
//!
//! Pseudo-legal moves come straight from the move database tables; sliders
//! and pawn advances additionally check their emptiness masks against the
//! occupied set. Legal moves are the pseudo-legal ones that do not leave
//! the mover's own king attacked, tested by applying the move.

use super::error::MoveError;
use super::position::{
    BLACK_CASTLED, BLACK_KINGSIDE, BLACK_QUEENSIDE, EP_SQUARES, TURN, WHITE_CASTLED,
    WHITE_KINGSIDE, WHITE_QUEENSIDE,
};
use super::types::{BitSet, Move, Piece, Player, Square};
use super::{Position, MDB};

/// Castling right invalidated when a piece moves from or is captured on
/// the given square.
fn corner_right(sq: Square) -> BitSet {
    match sq {
        Square::H1 => WHITE_KINGSIDE,
        Square::A1 => WHITE_QUEENSIDE,
        Square::H8 => BLACK_KINGSIDE,
        Square::A8 => BLACK_QUEENSIDE,
        _ => BitSet::EMPTY,
    }
}

impl Position {
    /// Whether `sq` is attacked by any piece of `by`.
    #[must_use]
    pub fn attacked(&self, sq: Square, by: Player) -> bool {
        let side = self.pieces_of(by);
        let occupied = self.occupied();

        if !MDB.knight_targets(sq).inter(self.kind(Piece::Knight)).inter(side).is_empty() {
            return true;
        }
        if !MDB.king_targets(sq).inter(self.kind(Piece::King)).inter(side).is_empty() {
            return true;
        }
        if !MDB.pawn_sources(by, sq).inter(self.kind(Piece::Pawn)).inter(side).is_empty() {
            return true;
        }
        for from in MDB.bishop_targets(sq).inter(self.diagonal_sliders()).inter(side) {
            if MDB.can_bishop(from, sq).inter(occupied).is_empty() {
                return true;
            }
        }
        for from in MDB.rook_targets(sq).inter(self.straight_sliders()).inter(side) {
            if MDB.can_rook(from, sq).inter(occupied).is_empty() {
                return true;
            }
        }
        false
    }

    /// Whether the king of `player` is currently attacked.
    #[must_use]
    pub fn in_check(&self, player: Player) -> bool {
        match self.king_of(player) {
            Some(sq) => self.attacked(sq, player.opponent()),
            None => false,
        }
    }

    /// The least valuable piece of `by` attacking `sq`, if any. Used by
    /// the hanging-piece evaluation.
    #[must_use]
    pub(crate) fn cheapest_attacker(&self, sq: Square, by: Player) -> Option<Piece> {
        let side = self.pieces_of(by);
        let occupied = self.occupied();

        if !MDB.pawn_sources(by, sq).inter(self.kind(Piece::Pawn)).inter(side).is_empty() {
            return Some(Piece::Pawn);
        }
        if !MDB.knight_targets(sq).inter(self.kind(Piece::Knight)).inter(side).is_empty() {
            return Some(Piece::Knight);
        }
        let clear_diagonal = |from: Square| MDB.can_bishop(from, sq).inter(occupied).is_empty();
        let clear_straight = |from: Square| MDB.can_rook(from, sq).inter(occupied).is_empty();
        if MDB
            .bishop_targets(sq)
            .inter(self.kind(Piece::Bishop))
            .inter(side)
            .iter()
            .any(clear_diagonal)
        {
            return Some(Piece::Bishop);
        }
        if MDB
            .rook_targets(sq)
            .inter(self.kind(Piece::Rook))
            .inter(side)
            .iter()
            .any(clear_straight)
        {
            return Some(Piece::Rook);
        }
        let queens = self.kind(Piece::Queen).inter(side);
        if MDB.bishop_targets(sq).inter(queens).iter().any(clear_diagonal)
            || MDB.rook_targets(sq).inter(queens).iter().any(clear_straight)
        {
            return Some(Piece::Queen);
        }
        if !MDB.king_targets(sq).inter(self.kind(Piece::King)).inter(side).is_empty() {
            return Some(Piece::King);
        }
        None
    }

    /// All moves of the player to move, ignoring whether the own king is
    /// left in check.
    #[must_use]
    pub(crate) fn pseudo_moves(&self) -> Vec<Move> {
        let me = self.turn();
        let own = self.pieces_of(me);
        let their = self.pieces_of(me.opponent());
        let occupied = self.occupied();
        let mut moves = Vec::with_capacity(48);

        for from in own {
            let piece = match self.piece_on(from) {
                Some((_, piece)) => piece,
                None => continue,
            };
            match piece {
                Piece::Knight => {
                    for to in MDB.knight_targets(from).minus(own) {
                        moves.push(Move::new(me, piece, from, to));
                    }
                }
                Piece::King => {
                    for to in MDB.king_targets(from).minus(own) {
                        moves.push(Move::new(me, piece, from, to));
                    }
                }
                Piece::Bishop => self.slider_moves(&mut moves, me, piece, from, own, false),
                Piece::Rook => self.slider_moves(&mut moves, me, piece, from, own, true),
                Piece::Queen => {
                    self.slider_moves(&mut moves, me, piece, from, own, false);
                    self.slider_moves(&mut moves, me, piece, from, own, true);
                }
                Piece::Pawn => {
                    for to in MDB.pawn_targets(me, from) {
                        let mask = MDB.can_pawn(me, from, to);
                        if mask.is_empty() {
                            // Capture shape: needs a victim or the en passant square
                            if their.contains(to) || self.en_passant() == Some(to) {
                                push_pawn_moves(&mut moves, me, from, to);
                            }
                        } else if mask.inter(occupied).is_empty() {
                            push_pawn_moves(&mut moves, me, from, to);
                        }
                    }
                }
            }
        }

        self.castling_moves(&mut moves, me);
        moves
    }

    fn slider_moves(
        &self,
        moves: &mut Vec<Move>,
        me: Player,
        piece: Piece,
        from: Square,
        own: BitSet,
        straight: bool,
    ) {
        let occupied = self.occupied();
        let targets = if straight {
            MDB.rook_targets(from)
        } else {
            MDB.bishop_targets(from)
        };
        for to in targets.minus(own) {
            let mask = if straight {
                MDB.can_rook(from, to)
            } else {
                MDB.can_bishop(from, to)
            };
            if mask.inter(occupied).is_empty() {
                moves.push(Move::new(me, piece, from, to));
            }
        }
    }

    fn castling_moves(&self, moves: &mut Vec<Move>, me: Player) {
        let opponent = me.opponent();
        let occupied = self.occupied();
        let rank = if me == Player::White { 0 } else { 7 };
        let king = Square::at(4, rank);

        if self.castling_available(me, true) {
            let between = BitSet::singleton(Square::at(5, rank)).with(Square::at(6, rank));
            if between.inter(occupied).is_empty()
                && !self.attacked(king, opponent)
                && !self.attacked(Square::at(5, rank), opponent)
            {
                moves.push(Move::new(me, Piece::King, king, Square::at(6, rank)));
            }
        }
        if self.castling_available(me, false) {
            let between = BitSet::singleton(Square::at(1, rank))
                .with(Square::at(2, rank))
                .with(Square::at(3, rank));
            if between.inter(occupied).is_empty()
                && !self.attacked(king, opponent)
                && !self.attacked(Square::at(3, rank), opponent)
            {
                moves.push(Move::new(me, Piece::King, king, Square::at(2, rank)));
            }
        }
    }

    /// All legal moves of the player to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let me = self.turn();
        self.pseudo_moves()
            .into_iter()
            .filter(|m| !self.apply_move(*m).in_check(me))
            .collect()
    }

    /// Apply a move, returning the successor position. The move is trusted
    /// to come from the generator; the hash, the castling and en passant
    /// flags and the halfmove clock are all maintained incrementally.
    #[must_use]
    pub fn apply_move(&self, m: Move) -> Position {
        let me = m.player;
        let mut next = *self;

        let direct_capture = next.piece_on(m.to).is_some();
        let ep_capture =
            m.piece == Piece::Pawn && !direct_capture && m.from.file() != m.to.file();

        if direct_capture {
            next.remove(m.to);
        }
        if ep_capture {
            next.remove(Square::at(m.to.file(), m.from.rank()));
        }
        next.remove(m.from);
        next.place(m.to, me, m.promote.unwrap_or(m.piece));

        let mut flags = self.flags.minus(EP_SQUARES);

        if m.is_castling() {
            let rank = m.from.rank();
            let (rook_from, rook_to) = if m.to.file() == 6 {
                (Square::at(7, rank), Square::at(5, rank))
            } else {
                (Square::at(0, rank), Square::at(3, rank))
            };
            next.remove(rook_from);
            next.place(rook_to, me, Piece::Rook);
            flags = flags.union(match me {
                Player::White => WHITE_CASTLED,
                Player::Black => BLACK_CASTLED,
            });
        }

        if m.piece == Piece::King {
            flags = match me {
                Player::White => flags.minus(WHITE_KINGSIDE).minus(WHITE_QUEENSIDE),
                Player::Black => flags.minus(BLACK_KINGSIDE).minus(BLACK_QUEENSIDE),
            };
        }
        flags = flags.minus(corner_right(m.from)).minus(corner_right(m.to));

        if m.is_double_push() {
            let ep_rank = (m.from.rank() + m.to.rank()) / 2;
            flags = flags.with(Square::at(m.from.file(), ep_rank));
        }

        next.set_flags(flags.sym_diff(TURN));
        next.set_halfmove_clock(
            if direct_capture || ep_capture || m.piece == Piece::Pawn {
                0
            } else {
                self.halfmove_clock() + 1
            },
        );
        next
    }

    /// Parse a move in long algebraic notation (`e2e4`, `e7e8q`) against
    /// the legal move set of this position.
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveError> {
        if notation.len() < 4 || notation.len() > 5 {
            return Err(MoveError::InvalidLength {
                len: notation.len(),
            });
        }
        let invalid = || MoveError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation
            .get(0..2)
            .ok_or_else(invalid)?
            .parse()
            .map_err(|_| invalid())?;
        let to: Square = notation
            .get(2..4)
            .ok_or_else(invalid)?
            .parse()
            .map_err(|_| invalid())?;
        let promote = match notation.chars().nth(4) {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(p) if Piece::PROMOTIONS.contains(&p) => Some(p),
                _ => return Err(MoveError::InvalidPromotion { char: c }),
            },
        };

        self.legal_moves()
            .into_iter()
            .find(|m| m.from == from && m.to == to && m.promote == promote)
            .ok_or_else(|| MoveError::Illegal {
                notation: notation.to_string(),
            })
    }

    /// Node count of the move tree to the given depth; ground truth for
    /// the generator.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .into_iter()
            .map(|m| self.apply_move(m).perft(depth - 1))
            .sum()
    }
}

fn push_pawn_moves(moves: &mut Vec<Move>, me: Player, from: Square, to: Square) {
    let last_rank = if me == Player::White { 7 } else { 0 };
    if to.rank() == last_rank {
        for promote in Piece::PROMOTIONS {
            moves.push(Move::promotion(me, from, to, promote));
        }
    } else {
        moves.push(Move::new(me, Piece::Pawn, from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_twenty_moves_from_start() {
        assert_eq!(Position::initial().legal_moves().len(), 20);
    }

    #[test]
    fn test_perft_start_position() {
        let pos = Position::initial();
        assert_eq!(pos.perft(1), 20);
        assert_eq!(pos.perft(2), 400);
        assert_eq!(pos.perft(3), 8902);
        assert_eq!(pos.perft(4), 197281);
    }

    #[test]
    fn test_perft_kiwipete() {
        let pos = Position::decode(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .unwrap();
        assert_eq!(pos.perft(1), 48);
        assert_eq!(pos.perft(2), 2039);
        assert_eq!(pos.perft(3), 97862);
    }

    #[test]
    fn test_perft_en_passant() {
        let pos = Position::decode(
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        )
        .unwrap();
        assert_eq!(pos.perft(1), 31);
        assert_eq!(pos.perft(2), 707);
        assert_eq!(pos.perft(3), 21637);
    }

    #[test]
    fn test_perft_promotion() {
        let pos = Position::decode("n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1").unwrap();
        assert_eq!(pos.perft(1), 24);
        assert_eq!(pos.perft(2), 496);
        assert_eq!(pos.perft(3), 9483);
    }

    #[test]
    fn test_perft_castling() {
        let pos = Position::decode("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        assert_eq!(pos.perft(1), 26);
        assert_eq!(pos.perft(2), 568);
        assert_eq!(pos.perft(3), 13744);
    }

    #[test]
    fn test_no_move_leaves_own_king_in_check() {
        let mut pos = Position::initial();
        // Walk a few plies deep, checking the invariant at every node
        for notation in ["e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "g8f6"] {
            for m in pos.legal_moves() {
                assert!(!pos.apply_move(m).in_check(m.player), "self-check: {m}");
            }
            pos = pos.apply_move(pos.parse_move(notation).unwrap());
        }
    }

    #[test]
    fn test_kingside_castle_is_generated() {
        let pos = Position::decode("8/8/8/8/8/3k4/8/R3K2R w KQ - 0 1").unwrap();
        let moves = pos.legal_moves();
        assert!(moves.iter().any(|m| m.to_string() == "e1g1"));
        assert!(moves.iter().any(|m| m.to_string() == "e1c1"));
    }

    #[test]
    fn test_castle_relocates_rook() {
        let pos = Position::decode("8/8/8/8/8/3k4/8/R3K2R w KQ - 0 1").unwrap();
        let castle = pos.parse_move("e1g1").unwrap();
        let next = pos.apply_move(castle);
        assert_eq!(next.piece_on(sq("g1")), Some((Player::White, Piece::King)));
        assert_eq!(next.piece_on(sq("f1")), Some((Player::White, Piece::Rook)));
        assert_eq!(next.piece_on(sq("h1")), None);
        assert!(next.has_castled(Player::White));
        assert!(!next.castling_available(Player::White, true));
        assert!(!next.castling_available(Player::White, false));
    }

    #[test]
    fn test_castling_blocked_through_check() {
        // Black rook covers f1; kingside castling must not be generated
        let pos = Position::decode("5r2/8/8/8/8/3k4/8/R3K2R w KQ - 0 1").unwrap();
        let moves = pos.legal_moves();
        assert!(!moves.iter().any(|m| m.to_string() == "e1g1"));
        assert!(moves.iter().any(|m| m.to_string() == "e1c1"));
    }

    #[test]
    fn test_double_push_sets_en_passant() {
        let pos = Position::decode("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        let next = pos.apply_move(pos.parse_move("e2e4").unwrap());
        assert_eq!(next.en_passant(), Some(sq("e3")));
        // The bit clears again on the following move
        let after = next.apply_move(next.parse_move("e8e7").unwrap());
        assert_eq!(after.en_passant(), None);
    }

    #[test]
    fn test_en_passant_capture_removes_pawn() {
        let pos = Position::decode(
            "rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        )
        .unwrap();
        let capture = pos.parse_move("d4e3").unwrap();
        let next = pos.apply_move(capture);
        assert_eq!(next.piece_on(sq("e4")), None);
        assert_eq!(next.piece_on(sq("e3")), Some((Player::Black, Piece::Pawn)));
    }

    #[test]
    fn test_promotion_fans_out() {
        let pos = Position::decode("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let promotions: Vec<Move> = pos
            .legal_moves()
            .into_iter()
            .filter(|m| m.from == sq("a7"))
            .collect();
        assert_eq!(promotions.len(), 4);
        assert!(promotions.iter().all(|m| m.promote.is_some()));
    }

    #[test]
    fn test_capture_changes_piece_count_by_one() {
        let pos = Position::initial();
        let mut pos = pos.apply_move(pos.parse_move("e2e4").unwrap());
        pos = pos.apply_move(pos.parse_move("d7d5").unwrap());
        assert_eq!(pos.occupied().count(), 32);
        let capture = pos.parse_move("e4d5").unwrap();
        assert_eq!(pos.apply_move(capture).occupied().count(), 31);
    }

    #[test]
    fn test_halfmove_clock_resets_on_pawn_move() {
        let pos = Position::initial();
        let pos = pos.apply_move(pos.parse_move("g1f3").unwrap());
        assert_eq!(pos.halfmove_clock(), 1);
        let pos = pos.apply_move(pos.parse_move("e7e5").unwrap());
        assert_eq!(pos.halfmove_clock(), 0);
    }

    #[test]
    fn test_incremental_hash_stays_consistent() {
        let mut pos = Position::initial();
        for notation in ["e2e4", "d7d5", "e4d5", "d8d5", "b1c3", "d5a5", "e1e2"] {
            pos = pos.apply_move(pos.parse_move(notation).unwrap());
            assert_eq!(pos.hash(), pos.rehash(), "hash drift after {notation}");
        }
    }

    #[test]
    fn test_exactly_one_king_each() {
        let mut pos = Position::initial();
        for notation in ["e2e4", "e7e5", "d1h5", "b8c6", "h5f7"] {
            pos = pos.apply_move(pos.parse_move(notation).unwrap());
            assert_eq!(pos.kind(Piece::King).inter(pos.whites).count(), 1);
            assert_eq!(pos.kind(Piece::King).minus(pos.whites).count(), 1);
        }
    }

    #[test]
    fn test_rook_move_drops_castling_right() {
        let pos = Position::decode("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let next = pos.apply_move(pos.parse_move("h1h2").unwrap());
        assert!(!next.castling_available(Player::White, true));
        assert!(next.castling_available(Player::White, false));
    }

    #[test]
    fn test_rook_capture_drops_castling_right() {
        let pos = Position::decode("r3k2r/8/8/8/8/8/6B1/R3K2R w KQkq - 0 1").unwrap();
        // Bishop takes the a8 rook; black loses the queenside right
        let next = pos.apply_move(pos.parse_move("g2a8").unwrap());
        assert!(!next.castling_available(Player::Black, false));
        assert!(next.castling_available(Player::Black, true));
    }

    #[test]
    fn test_parse_move_errors() {
        let pos = Position::initial();
        assert!(matches!(
            pos.parse_move("e2"),
            Err(MoveError::InvalidLength { .. })
        ));
        assert!(matches!(
            pos.parse_move("z9z9"),
            Err(MoveError::InvalidSquare { .. })
        ));
        assert!(matches!(
            pos.parse_move("e2e5"),
            Err(MoveError::Illegal { .. })
        ));
        assert!(matches!(
            pos.parse_move("e2e4k"),
            Err(MoveError::InvalidPromotion { .. })
        ));
    }

    #[test]
    fn test_cheapest_attacker_order() {
        let pos = Position::decode("4k3/8/8/3p4/4P3/8/8/4KR2 w - - 0 1").unwrap();
        assert_eq!(pos.cheapest_attacker(sq("d5"), Player::White), Some(Piece::Pawn));
        assert_eq!(pos.cheapest_attacker(sq("f7"), Player::White), Some(Piece::Rook));
        assert_eq!(pos.cheapest_attacker(sq("d2"), Player::White), Some(Piece::King));
        assert_eq!(pos.cheapest_attacker(sq("a8"), Player::White), None);
    }
}
