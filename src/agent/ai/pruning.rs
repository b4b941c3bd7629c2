// Bound-Threaded Negamax
//
// Same contract as the exhaustive engine, but a running bound is carried down
// the tree: the best value the mover has already secured at the current level
// through an earlier sibling. Two shortcuts follow from it.
//
// - While scanning the opponent's replies to a move, a reply worth at least
//   -bound to the opponent proves the move cannot beat what is already
//   secured. The scan stops and the move is recorded as a loss. Win is used as
//   the sentinel for the reply, so this Loss only means "no improvement", not
//   a proven loss.
// - Once a move is recorded as a win, no later sibling can do better, and the
//   remaining moves are not enumerated.
//
// Classic alpha-beta keeps two bounds. With values restricted to {-1, 0, 1}
// in a zero-sum game a single bound carried to the grandchildren is enough.
// This relies on the three-valued domain and is checked by the differential
// tests, not assumed to carry over to richer scores.
//
// The reported map may therefore be partial, and moves that were cut read as
// losses. Its first maximal entry is still the move the exhaustive engine
// selects, with the same value.

use super::score::{score, Score};
use super::score_map::ScoreMap;
use super::search::SearchStats;
use crate::error::SearchResult;
use crate::game_repr::{MoveList, Position};

/// The opponent's replies to one of the mover's moves
struct ReplyScan<P: Position> {
    /// Index of the mover's move that led here
    index: usize,
    position: P,
    replies: MoveList<P::Move>,
    next: usize,
    /// Best value any reply has shown the opponent so far
    opponent_best: Score,
}

/// One pending position on the explicit search stack
struct Frame<P: Position> {
    position: P,
    moves: MoveList<P::Move>,
    next: usize,
    /// Best value already secured for the mover, seeded by the caller
    bound: Score,
    scores: ScoreMap,
    /// Best value recorded in `scores`
    best: Score,
    scan: Option<ReplyScan<P>>,
}

impl<P: Position> Frame<P> {
    fn new(position: P, moves: MoveList<P::Move>, bound: Score) -> Self {
        let scores = ScoreMap::with_capacity(moves.len());
        Self {
            position,
            moves,
            next: 0,
            bound,
            scores,
            best: Score::Loss,
            scan: None,
        }
    }

    fn record(&mut self, index: usize, value: Score) {
        self.scores.insert(index, value);
        self.best = self.best.max(value);
        self.bound = self.bound.max(value);
    }

    /// Feed the opponent's value for one reply into the open scan.
    /// Returns true when the reply cut the scan off.
    fn absorb_reply(&mut self, reply: Score) -> bool {
        let Some(scan) = self.scan.as_mut() else {
            return false;
        };

        if reply >= -self.bound {
            let index = scan.index;
            self.scan = None;
            self.record(index, -Score::Win);
            log::trace!("cutoff on move {} with bound {}", index, self.bound);
            true
        } else {
            scan.opponent_best = scan.opponent_best.max(reply);
            false
        }
    }
}

/// Evaluate `position` for the player to move with a threaded bound.
///
/// `bound` is the value the mover is already guaranteed elsewhere;
/// [`Score::WORST`] at the root. A position without moves yields the sentinel
/// entry holding its terminal score.
pub fn negamax_pruned<P: Position>(
    position: &P,
    bound: Score,
    stats: &mut SearchStats,
) -> SearchResult<ScoreMap> {
    let moves = position.legal_moves();
    if moves.is_empty() {
        let (mover, _) = score(position)?;
        return Ok(ScoreMap::terminal(mover));
    }

    stats.nodes_searched += 1;
    let mut stack = vec![Frame::new(position.clone(), moves, bound)];

    while let Some(frame) = stack.last_mut() {
        if let Some(scan) = frame.scan.as_mut() {
            if let Some(reply) = scan.replies.get(scan.next) {
                let grandchild = scan.position.apply_move(reply);
                scan.next += 1;
                let grandchild_moves = grandchild.legal_moves();

                if grandchild_moves.is_empty() {
                    let (mover, _) = score(&grandchild)?;
                    if frame.absorb_reply(-mover) {
                        stats.cutoffs += 1;
                    }
                } else {
                    stats.nodes_searched += 1;
                    let bound = frame.bound;
                    stack.push(Frame::new(grandchild, grandchild_moves, bound));
                }
            } else {
                // Every reply seen and none reached the bound
                let (index, opponent_best) = (scan.index, scan.opponent_best);
                frame.scan = None;
                frame.record(index, -opponent_best);
            }
            continue;
        }

        if !frame.scores.contains(Score::Win) {
            if let Some(mv) = frame.moves.get(frame.next) {
                let index = frame.next;
                let child = frame.position.apply_move(mv);
                frame.next += 1;
                let replies = child.legal_moves();

                if replies.is_empty() {
                    let (mover, _) = score(&child)?;
                    frame.record(index, -mover);
                } else {
                    stats.nodes_searched += 1;
                    frame.scan = Some(ReplyScan {
                        index,
                        position: child,
                        replies,
                        next: 0,
                        opponent_best: Score::Loss,
                    });
                }
                continue;
            }
        }

        // Frame finished: its best value is the opponent's value for a reply
        let Some(done) = stack.pop() else { break };
        match stack.last_mut() {
            Some(parent) => {
                if parent.absorb_reply(-done.best) {
                    stats.cutoffs += 1;
                }
            }
            None => return Ok(done.scores),
        }
    }

    unreachable!("root frame returns before the stack empties")
}
