// Exhaustive Negamax Search
//
// Negamax uses the zero-sum property, max(a, b) = -min(-a, -b), so a single
// routine serves both players: a move is worth the negation of the best value
// the opponent can reach after it. Games are searched to the end, so every
// value is exact and lies in {-1, 0, 1}.
//
// The descent runs over an explicit stack of frames rather than the call
// stack. Depth is limited only by heap memory, and the traversal order is the
// same as the recursive formulation: children in move index order, each one
// solved completely before the next is started.
//
// The same driver serves the memoized variant. A solved-position cache is
// consulted before descending into a child and updated when a frame
// completes. For the plain engine the cache does nothing.

use super::score::{score, Score};
use super::score_map::{MoveSlot, ScoreMap};
use super::search::SearchStats;
use super::transposition_table::{TranspositionEntry, TranspositionTable};
use crate::error::SearchResult;
use crate::game_repr::{Canonical, MoveList, Position};

/// Store of fully solved positions consulted by the negamax driver.
///
/// Parents only ever need the best value of a child, so a cache hit may stand
/// in for the child's whole score map.
pub(crate) trait SolvedCache<P: Position> {
    fn lookup(&mut self, position: &P) -> Option<TranspositionEntry>;
    fn record(&mut self, position: &P, scores: &ScoreMap);
}

/// Cache that never remembers anything
pub(crate) struct NoCache;

impl<P: Position> SolvedCache<P> for NoCache {
    fn lookup(&mut self, _position: &P) -> Option<TranspositionEntry> {
        None
    }

    fn record(&mut self, _position: &P, _scores: &ScoreMap) {}
}

/// One pending position on the explicit search stack
struct Frame<P: Position> {
    position: P,
    moves: MoveList<P::Move>,
    scores: ScoreMap,
    /// Best value recorded so far
    best: Score,
}

impl<P: Position> Frame<P> {
    fn new(position: P, moves: MoveList<P::Move>) -> Self {
        let scores = ScoreMap::with_capacity(moves.len());
        Self {
            position,
            moves,
            scores,
            best: Score::Loss,
        }
    }

    /// Next move still to be scored, moves are scored strictly in order
    fn next_move(&self) -> Option<&P::Move> {
        self.moves.get(self.scores.len())
    }

    fn record(&mut self, value: Score) {
        let index = self.scores.len();
        self.scores.insert(index, value);
        self.best = self.best.max(value);
    }
}

/// Evaluate every legal move of `position` for the player to move.
///
/// A position without moves yields the single sentinel entry holding its own
/// terminal score. Otherwise the map has one entry per legal move.
pub fn negamax<P: Position>(position: &P, stats: &mut SearchStats) -> SearchResult<ScoreMap> {
    solve(position, &mut NoCache, stats)
}

/// Negamax that consults and extends `table`.
///
/// When `position` itself is already in the table the result is a single
/// entry holding the stored best move and value. For max-aggregation this is
/// equivalent to the full map.
pub fn negamax_memoized<P: Canonical>(
    position: &P,
    table: &mut TranspositionTable<P::Key>,
    stats: &mut SearchStats,
) -> SearchResult<ScoreMap> {
    solve(position, table, stats)
}

fn solve<P, C>(position: &P, cache: &mut C, stats: &mut SearchStats) -> SearchResult<ScoreMap>
where
    P: Position,
    C: SolvedCache<P>,
{
    let moves = position.legal_moves();
    if moves.is_empty() {
        let (mover, _) = score(position)?;
        return Ok(ScoreMap::terminal(mover));
    }

    if let Some(entry) = cache.lookup(position) {
        return Ok(ScoreMap::single(MoveSlot::Index(entry.best_move), entry.score));
    }

    stats.nodes_searched += 1;
    let mut stack = vec![Frame::new(position.clone(), moves)];

    while let Some(frame) = stack.last_mut() {
        if let Some(mv) = frame.next_move() {
            let child = frame.position.apply_move(mv);
            let child_moves = child.legal_moves();

            if child_moves.is_empty() {
                let (mover, _) = score(&child)?;
                frame.record(-mover);
            } else if let Some(entry) = cache.lookup(&child) {
                frame.record(-entry.score);
            } else {
                stats.nodes_searched += 1;
                stack.push(Frame::new(child, child_moves));
            }
            continue;
        }

        // Every move scored: the opponent's best becomes the parent's value
        let Some(done) = stack.pop() else { break };
        cache.record(&done.position, &done.scores);

        match stack.last_mut() {
            Some(parent) => parent.record(-done.best),
            None => return Ok(done.scores),
        }
    }

    unreachable!("root frame returns before the stack empties")
}
