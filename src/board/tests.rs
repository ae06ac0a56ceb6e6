//! Property-based tests over random legal move walks.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{Piece, Position};

fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=24usize
}

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Walk `num_moves` random legal moves from the start position.
fn random_walk(seed: u64, num_moves: usize) -> Position {
    let mut pos = Position::initial();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = pos.legal_moves();
        if moves.is_empty() {
            break;
        }
        pos = pos.apply_move(moves[rand::Rng::gen_range(&mut rng, 0..moves.len())]);
    }
    pos
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The incremental hash never drifts from the recomputed one.
    #[test]
    fn prop_hash_consistency(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = Position::initial();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..num_moves {
            let moves = pos.legal_moves();
            if moves.is_empty() {
                break;
            }
            pos = pos.apply_move(moves[rand::Rng::gen_range(&mut rng, 0..moves.len())]);
            prop_assert_eq!(pos.hash(), pos.rehash());
        }
    }

    /// FEN output re-decodes to the same record.
    #[test]
    fn prop_fen_reencodes_stably(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let pos = random_walk(seed, num_moves);
        let fen = pos.encode();
        let back = Position::decode(&fen).unwrap();
        prop_assert_eq!(back.encode(), fen);
    }

    /// No generated move ever leaves the mover's king attacked.
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let pos = random_walk(seed, num_moves);
        for m in pos.legal_moves() {
            let after = pos.apply_move(m);
            prop_assert!(!after.in_check(m.player), "self-check after {}", m);
        }
    }

    /// A move changes the piece count by exactly its capture, and the
    /// encoding invariants hold at every step.
    #[test]
    fn prop_apply_move_invariants(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = Position::initial();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..num_moves {
            let moves = pos.legal_moves();
            if moves.is_empty() {
                break;
            }
            let before = pos.occupied().count();
            pos = pos.apply_move(moves[rand::Rng::gen_range(&mut rng, 0..moves.len())]);
            let after = pos.occupied().count();
            prop_assert!(after == before || after == before - 1);

            // The three piece-bit sets never all contain the same square
            prop_assert!(pos.pawns.inter(pos.bishops).inter(pos.rooks).is_empty());
            // Whites stays a subset of the occupied set
            prop_assert!(pos.whites.is_subset(pos.occupied()));
            // Exactly one king per side
            prop_assert_eq!(pos.kind(Piece::King).inter(pos.whites).count(), 1);
            prop_assert_eq!(pos.kind(Piece::King).minus(pos.whites).count(), 1);
        }
    }
}
