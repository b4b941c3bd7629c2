//! Strategy Registry - enumerate and instantiate the available solvers
//!
//! Every kind solves the game to the end and picks the same move. They differ
//! only in how much work they repeat.

use super::{MemoizedStrategy, MinimaxStrategy, PruningStrategy};
use crate::agent::strategy::Strategy;
use crate::game_repr::Canonical;

/// Enumeration of available solver algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    /// Exhaustive negamax over every legal move
    Minimax,
    /// Exhaustive negamax with a per-session transposition table
    #[default]
    Memoized,
    /// Negamax with a single threaded bound
    Pruning,
}

impl StrategyKind {
    /// Get all available strategy kinds
    pub fn all() -> &'static [StrategyKind] {
        &[StrategyKind::Minimax, StrategyKind::Memoized, StrategyKind::Pruning]
    }

    /// Get the display name for this strategy kind
    pub fn display_name(&self) -> &'static str {
        match self {
            StrategyKind::Minimax => "Minimax",
            StrategyKind::Memoized => "Memoized",
            StrategyKind::Pruning => "Pruning",
        }
    }

    /// Get a short description of this strategy kind
    pub fn description(&self) -> &'static str {
        match self {
            StrategyKind::Minimax => "Exhaustive negamax, every move scored exactly",
            StrategyKind::Memoized => "Negamax that solves each position once per session",
            StrategyKind::Pruning => "Negamax that skips moves unable to improve the bound",
        }
    }

    /// Whether sessions of this kind keep a transposition table
    pub fn uses_table(&self) -> bool {
        matches!(self, StrategyKind::Memoized)
    }

    /// Create a fresh session of this kind
    ///
    /// `table_capacity` pre-sizes the transposition table and is ignored by
    /// kinds that keep none.
    pub fn create_strategy<P>(&self, table_capacity: usize) -> Box<dyn Strategy<P>>
    where
        P: Canonical + 'static,
    {
        match self {
            StrategyKind::Minimax => Box::new(MinimaxStrategy::new()),
            StrategyKind::Memoized => {
                Box::new(MemoizedStrategy::<P::Key>::with_capacity(table_capacity))
            }
            StrategyKind::Pruning => Box::new(PruningStrategy::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{PlayerId, SubtractSquare};

    #[test]
    fn test_strategy_kind_all() {
        let all = StrategyKind::all();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&StrategyKind::Pruning));
    }

    #[test]
    fn test_display_names_match_sessions() {
        for &kind in StrategyKind::all() {
            let strategy = kind.create_strategy::<SubtractSquare>(16);
            assert_eq!(strategy.name(), kind.display_name());
            assert!(!kind.description().is_empty());
        }
    }

    #[test]
    fn test_default_kind() {
        assert_eq!(StrategyKind::default(), StrategyKind::Memoized);
        assert!(StrategyKind::default().uses_table());
        assert!(!StrategyKind::Pruning.uses_table());
    }

    #[test]
    fn test_created_sessions_play() {
        let pos = SubtractSquare::new(11, PlayerId::Two);
        for &kind in StrategyKind::all() {
            let mut strategy = kind.create_strategy::<SubtractSquare>(0);
            assert_eq!(strategy.suggest_move(&pos), Ok(1), "{}", kind.display_name());
        }
    }
}
