//! Solver configuration.
//!
//! A [`SolverConfig`] names the algorithm and the table sizing and builds a
//! ready strategy session from them.

use crate::agent::ai::StrategyKind;
use crate::agent::strategy::Strategy;
use crate::game_repr::Canonical;

/// Default pre-sizing for a memoized session's table
pub const DEFAULT_TABLE_CAPACITY: usize = 4096;

/// Complete configuration for one strategy session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// The solver algorithm to use
    pub kind: StrategyKind,
    /// Entries the transposition table reserves up front. Only the memoized
    /// kind keeps a table, and it grows past this as needed.
    pub table_capacity: usize,
}

impl SolverConfig {
    /// Create a configuration for exhaustive negamax.
    pub fn minimax() -> Self {
        Self {
            kind: StrategyKind::Minimax,
            table_capacity: 0,
        }
    }

    /// Create a configuration for the memoized solver.
    pub fn memoized() -> Self {
        Self {
            kind: StrategyKind::Memoized,
            table_capacity: DEFAULT_TABLE_CAPACITY,
        }
    }

    /// Create a configuration for bound-threaded negamax.
    pub fn pruning() -> Self {
        Self {
            kind: StrategyKind::Pruning,
            table_capacity: 0,
        }
    }

    /// Replace the table capacity hint.
    pub fn with_table_capacity(mut self, table_capacity: usize) -> Self {
        self.table_capacity = table_capacity;
        self
    }

    /// Build a fresh session for positions of type `P`.
    pub fn build<P: Canonical + 'static>(&self) -> Box<dyn Strategy<P>> {
        log::debug!(
            "building {} session, table capacity {}",
            self.kind.display_name(),
            self.table_capacity
        );
        self.kind.create_strategy(self.table_capacity)
    }

    /// Get a display string for this configuration
    pub fn display_string(&self) -> String {
        if self.kind.uses_table() {
            format!("{} ({} entries)", self.kind.display_name(), self.table_capacity)
        } else {
            self.kind.display_name().to_string()
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::memoized()
    }
}
