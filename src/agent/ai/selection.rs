// Move Selection
//
// Deterministic policy over an evaluated score map: the first winning move in
// index order, else the first drawing move, else the first move present. All
// moves losing makes any choice equally justified, so the first is taken.

use super::score::Score;
use super::score_map::{MoveSlot, ScoreMap};
use crate::error::{SearchError, SearchResult};

/// Slot and score the selection policy prefers, `None` for an empty map
pub fn best_entry(scores: &ScoreMap) -> Option<(MoveSlot, Score)> {
    scores
        .iter()
        .find(|&(_, score)| score == Score::Win)
        .or_else(|| scores.iter().find(|&(_, score)| score == Score::Draw))
        .or_else(|| scores.iter().next())
}

/// Choose a move from `moves` according to `scores`.
///
/// `moves` must be the legal move enumeration the map was computed against.
/// A sentinel or empty map means there is nothing to pick and yields
/// [`SearchError::TerminalPosition`].
pub fn pick<M: Clone>(scores: &ScoreMap, moves: &[M]) -> SearchResult<M> {
    match best_entry(scores) {
        Some((MoveSlot::Index(index), _)) => {
            moves
                .get(index)
                .cloned()
                .ok_or(SearchError::MoveIndexOutOfRange {
                    index,
                    available: moves.len(),
                })
        }
        Some((MoveSlot::NoMoves, _)) | None => Err(SearchError::TerminalPosition),
    }
}
