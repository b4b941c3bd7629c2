// AI Agent - Exact Negamax Solvers
//
// This module solves deterministic two-player zero-sum games to the end and
// picks a move that secures the best achievable outcome: win, else draw, else
// loss.
//
// Key features:
// - Deterministic (same position always gives same move)
// - Three-valued scores closed under negation and max
// - Explicit work-stack search, depth bounded only by memory
// - Per-session transposition table for the memoized variant
// - Single-bound pruning for the bound-threaded variant

mod ai_type;
mod negamax;
mod pruning;
mod score;
mod score_map;
mod search;
mod selection;
mod strategies;
mod transposition_table;

#[cfg(test)]
mod tests;

pub use ai_type::StrategyKind;
pub use negamax::{negamax, negamax_memoized};
pub use pruning::negamax_pruned;
pub use score::{score, Score};
pub use score_map::{MoveSlot, ScoreMap};
pub use search::SearchStats;
pub use selection::{best_entry, pick};
pub use strategies::{MemoizedStrategy, MinimaxStrategy, PruningStrategy};
pub use transposition_table::{TranspositionEntry, TranspositionTable};
