//! Transposition table for caching search results.
//!
//! Keyed by Zobrist hash. Each entry keeps the searched depth, the score
//! with its bound kind, the principal variation found from the position
//! and the ordered move list, so later iterations can reuse both the
//! bounds and the move ordering.

use std::collections::HashMap;

use crate::board::Move;

/// How a stored score relates to the true value of the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// Score is the exact value
    Exact,
    /// Score is at least this value (a beta cutoff happened)
    Lower,
    /// Score is at most this value (no move raised alpha)
    Upper,
}

/// A cached search result for one position.
#[derive(Clone, Debug)]
pub struct Transposition {
    pub depth: u32,
    pub score: i32,
    pub bound: Bound,
    /// Best line found from this position
    pub pv: Vec<Move>,
    /// Move ordering used here, best candidates first
    pub moves: Vec<Move>,
}

/// Mapping from position hash to cached search result.
#[derive(Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, Transposition>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        TranspositionTable {
            entries: HashMap::new(),
        }
    }

    /// Look up the entry for a position hash.
    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<&Transposition> {
        self.entries.get(&hash)
    }

    /// Store an entry, keeping whichever of old and new searched deeper.
    pub fn store(&mut self, hash: u64, entry: Transposition) {
        match self.entries.get(&hash) {
            Some(existing) if existing.depth > entry.depth => {}
            _ => {
                self.entries.insert(hash, entry);
            }
        }
    }

    /// Number of cached positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all cached results.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(depth: u32, score: i32) -> Transposition {
        Transposition {
            depth,
            score,
            bound: Bound::Exact,
            pv: Vec::new(),
            moves: Vec::new(),
        }
    }

    #[test]
    fn test_store_and_probe() {
        let mut tt = TranspositionTable::new();
        assert!(tt.probe(42).is_none());
        tt.store(42, entry(3, 100));
        let found = tt.probe(42).unwrap();
        assert_eq!(found.depth, 3);
        assert_eq!(found.score, 100);
    }

    #[test]
    fn test_deeper_entry_wins() {
        let mut tt = TranspositionTable::new();
        tt.store(42, entry(5, 100));
        tt.store(42, entry(3, 999));
        assert_eq!(tt.probe(42).unwrap().score, 100);
        tt.store(42, entry(6, 50));
        assert_eq!(tt.probe(42).unwrap().score, 50);
    }

    #[test]
    fn test_equal_depth_replaces() {
        let mut tt = TranspositionTable::new();
        tt.store(42, entry(3, 100));
        tt.store(42, entry(3, 200));
        assert_eq!(tt.probe(42).unwrap().score, 200);
    }

    #[test]
    fn test_clear() {
        let mut tt = TranspositionTable::new();
        tt.store(1, entry(1, 1));
        tt.store(2, entry(1, 2));
        assert_eq!(tt.len(), 2);
        tt.clear();
        assert!(tt.is_empty());
    }
}
