// Search statistics
//
// Counters accumulated by the engines and kept per strategy session. The node
// count is what tests use to observe whether the solver actually ran.

use std::ops::AddAssign;

/// Counters for one or more searches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions whose legal moves the solver enumerated and descended into
    pub nodes_searched: u64,
    /// Reply scans abandoned by the pruned engine
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes_searched += other.nodes_searched;
        self.cutoffs += other.cutoffs;
    }
}

/// Log search information for a completed suggestion
pub(crate) fn log_search_info(strategy: &str, score: Option<f64>, stats: &SearchStats) {
    log::debug!(
        "{} score {:?} nodes {} cutoffs {}",
        strategy,
        score,
        stats.nodes_searched,
        stats.cutoffs
    );
}
