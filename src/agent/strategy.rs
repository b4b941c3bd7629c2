//! Strategy trait for agents that pick moves in a two-player game.
//!
//! A strategy session is asked for a move and answers with the one its solver
//! prefers. Sessions may keep state between calls (statistics, a table of
//! solved positions), so `suggest_move` takes `&mut self`.
//!
//! The trait does not define a constructor. Each session has its own
//! construction needs; [`crate::config::SolverConfig`] and
//! [`crate::agent::ai::StrategyKind`] build boxed sessions by name.
//!
//! # Synchronous Design
//!
//! `suggest_move` blocks until the game under `position` is fully solved.
//! Sessions are single-threaded and are neither `Send` nor `Sync` by
//! contract. Independent sessions may run on separate threads.

use crate::error::SearchResult;
use crate::game_repr::Position;

/// Trait for sessions that can suggest a move for the player to move.
pub trait Strategy<P: Position> {
    /// Choose a move for the player to move in `position`.
    ///
    /// The move is one of `position.legal_moves()`. A position that is
    /// terminal or has no legal moves fails with
    /// [`crate::error::SearchError::TerminalPosition`]. Scoring errors from
    /// the game itself are propagated unchanged.
    fn suggest_move(&mut self, position: &P) -> SearchResult<P::Move>;

    /// Get the display name of this strategy.
    fn name(&self) -> &str {
        "Strategy"
    }
}
