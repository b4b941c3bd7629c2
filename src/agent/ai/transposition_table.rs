use std::collections::HashMap;
use std::hash::Hash;

use super::negamax::SolvedCache;
use super::score::Score;
use super::score_map::{MoveSlot, ScoreMap};
use super::selection::best_entry;
use crate::game_repr::Canonical;

/// Best move and value of a fully solved position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranspositionEntry {
    /// Index of the preferred move in the position's legal move enumeration
    pub best_move: usize,
    /// Value of that move for the player to move
    pub score: Score,
}

/// Transposition Table for storing solved positions
///
/// Keyed by the collaborator's canonical key. Entries are exact (the game is
/// solved to the end, so there are no depths or bounds to track) and are
/// never evicted: the table lives exactly as long as the session that owns it.
///
/// The table only ever answers "what is the best value here", which is all a
/// negamax parent needs from a child.
#[derive(Debug)]
pub struct TranspositionTable<K> {
    table: HashMap<K, TranspositionEntry>,
    /// Statistics: number of successful probes
    pub hits: u64,
    /// Statistics: number of failed probes
    pub misses: u64,
}

impl<K: Eq + Hash> TranspositionTable<K> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a table with room for `capacity` entries before reallocating.
    /// The table still grows without bound past this.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: HashMap::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Probe the table for a position key. Updates hit/miss statistics.
    pub fn probe(&mut self, key: &K) -> Option<TranspositionEntry> {
        match self.table.get(key) {
            Some(entry) => {
                self.hits += 1;
                Some(*entry)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Look up without touching statistics
    pub fn get(&self, key: &K) -> Option<&TranspositionEntry> {
        self.table.get(key)
    }

    pub fn store(&mut self, key: K, entry: TranspositionEntry) {
        self.table.insert(key, entry);
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Get hit rate (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl<K: Eq + Hash> Default for TranspositionTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Canonical> SolvedCache<P> for TranspositionTable<P::Key> {
    fn lookup(&mut self, position: &P) -> Option<TranspositionEntry> {
        let key = position.canonical_key();
        let entry = self.probe(&key)?;
        log::trace!("table hit for {:?}: {}", key, entry.score);
        Some(entry)
    }

    fn record(&mut self, position: &P, scores: &ScoreMap) {
        if let Some((MoveSlot::Index(best_move), score)) = best_entry(scores) {
            self.store(position.canonical_key(), TranspositionEntry { best_move, score });
        }
    }
}
