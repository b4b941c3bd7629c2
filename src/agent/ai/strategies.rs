//! Strategy sessions over the three solvers.
//!
//! Each session wraps one engine, keeps cumulative [`SearchStats`], and
//! implements [`Strategy`] by evaluating the position and handing the score
//! map to the move selector.
//!
//! - [`MinimaxStrategy`] solves every legal move exhaustively.
//! - [`MemoizedStrategy`] does the same through a transposition table it owns
//!   for its whole lifetime, so repeated or transposed positions are solved
//!   once per session.
//! - [`PruningStrategy`] threads a bound through the search and skips moves
//!   that cannot improve on what is already secured.
//!
//! All three pick the same move with the same value for any position.
//!
//! # Examples
//!
//! ```
//! use perfect_play::agent::ai::MemoizedStrategy;
//! use perfect_play::agent::Strategy;
//! use perfect_play::game_repr::{PlayerId, SubtractSquare};
//!
//! let mut strategy: MemoizedStrategy<(u32, PlayerId)> = MemoizedStrategy::new();
//! let position = SubtractSquare::new(11, PlayerId::One);
//!
//! // 11 - 1 = 10 leaves the opponent a losing count
//! assert_eq!(strategy.suggest_move(&position), Ok(1));
//! ```

use std::hash::Hash;

use super::negamax::{negamax, negamax_memoized};
use super::pruning::negamax_pruned;
use super::score::Score;
use super::score_map::ScoreMap;
use super::search::{log_search_info, SearchStats};
use super::selection::pick;
use super::transposition_table::TranspositionTable;
use crate::agent::strategy::Strategy;
use crate::error::{SearchError, SearchResult};
use crate::game_repr::{Canonical, MoveList, Position};

/// Legal moves of a position a move can be suggested for
fn playable_moves<P: Position>(position: &P) -> SearchResult<MoveList<P::Move>> {
    if position.is_terminal() {
        return Err(SearchError::TerminalPosition);
    }
    let moves = position.legal_moves();
    if moves.is_empty() {
        return Err(SearchError::TerminalPosition);
    }
    Ok(moves)
}

/// Pick from an evaluated map and report the search
fn conclude<M: Clone>(
    name: &str,
    scores: &ScoreMap,
    moves: &[M],
    call_stats: &SearchStats,
) -> SearchResult<M> {
    let chosen = pick(scores, moves)?;
    log_search_info(name, scores.max().map(Score::as_f64), call_stats);
    Ok(chosen)
}

/// Exhaustive negamax session
#[derive(Debug, Clone, Default)]
pub struct MinimaxStrategy {
    stats: SearchStats,
}

impl MinimaxStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics accumulated over every call on this session
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Score every legal move of `position` for the player to move
    pub fn evaluate<P: Position>(&mut self, position: &P) -> SearchResult<ScoreMap> {
        let mut call_stats = SearchStats::new();
        let result = negamax(position, &mut call_stats);
        self.stats += call_stats;
        result
    }
}

impl<P: Position> Strategy<P> for MinimaxStrategy {
    fn suggest_move(&mut self, position: &P) -> SearchResult<P::Move> {
        let moves = playable_moves(position)?;

        let mut call_stats = SearchStats::new();
        let scores = negamax(position, &mut call_stats);
        self.stats += call_stats;

        conclude(Strategy::<P>::name(self), &scores?, moves.as_slice(), &call_stats)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// Negamax session backed by its own transposition table
///
/// The table is created with the session, is never shared, and only grows.
/// Asking again about a solved position answers from the table without
/// expanding a single node.
#[derive(Debug)]
pub struct MemoizedStrategy<K> {
    table: TranspositionTable<K>,
    stats: SearchStats,
}

impl<K: Eq + Hash> MemoizedStrategy<K> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Session whose table is pre-sized for `capacity` positions
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: TranspositionTable::with_capacity(capacity),
            stats: SearchStats::new(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn table(&self) -> &TranspositionTable<K> {
        &self.table
    }

    /// Score the legal moves of `position` through the session table.
    ///
    /// When `position` was solved before, the map holds only the stored best
    /// move and its value.
    pub fn evaluate<P>(&mut self, position: &P) -> SearchResult<ScoreMap>
    where
        P: Canonical<Key = K>,
    {
        let mut call_stats = SearchStats::new();
        let result = negamax_memoized(position, &mut self.table, &mut call_stats);
        self.stats += call_stats;
        result
    }
}

impl<K: Eq + Hash> Default for MemoizedStrategy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Canonical> Strategy<P> for MemoizedStrategy<P::Key> {
    fn suggest_move(&mut self, position: &P) -> SearchResult<P::Move> {
        let moves = playable_moves(position)?;

        let mut call_stats = SearchStats::new();
        let scores = negamax_memoized(position, &mut self.table, &mut call_stats);
        self.stats += call_stats;

        let chosen = conclude(Strategy::<P>::name(self), &scores?, moves.as_slice(), &call_stats)?;
        log::debug!(
            "table {} entries, hit rate {:.2}",
            self.table.size(),
            self.table.hit_rate()
        );
        Ok(chosen)
    }

    fn name(&self) -> &str {
        "Memoized"
    }
}

/// Bound-threaded negamax session
#[derive(Debug, Clone, Default)]
pub struct PruningStrategy {
    stats: SearchStats,
}

impl PruningStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Score the moves of `position` with the bound starting at a loss.
    ///
    /// The map may be partial: scanning stops after the first winning move,
    /// and moves cut off by the bound read as losses.
    pub fn evaluate<P: Position>(&mut self, position: &P) -> SearchResult<ScoreMap> {
        let mut call_stats = SearchStats::new();
        let result = negamax_pruned(position, Score::WORST, &mut call_stats);
        self.stats += call_stats;
        result
    }
}

impl<P: Position> Strategy<P> for PruningStrategy {
    fn suggest_move(&mut self, position: &P) -> SearchResult<P::Move> {
        let moves = playable_moves(position)?;

        let mut call_stats = SearchStats::new();
        let scores = negamax_pruned(position, Score::WORST, &mut call_stats);
        self.stats += call_stats;

        conclude(Strategy::<P>::name(self), &scores?, moves.as_slice(), &call_stats)
    }

    fn name(&self) -> &str {
        "Pruning"
    }
}
