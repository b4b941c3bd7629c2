//! Position capability interface consumed by the solver, plus reference games.
//!
//! The solver never looks inside a position. It only asks who moves, what the
//! legal moves are, what applying one produces, and how a finished game ended.
//! The memoized variant additionally needs a canonical key through
//! [`Canonical`].
//!
//! # Trust boundary
//!
//! [`Canonical::canonical_key`] must be injective: two distinct positions may
//! never share a key, and equal keys must denote positions with the same value
//! under optimal play. The solver performs no validation of this. A collision
//! silently corrupts memoized results.

mod game_tree;
mod subtract_square;
mod tic_tac_toe;

use smallvec::SmallVec;
use std::fmt::Debug;
use std::hash::Hash;

pub use game_tree::{GameTree, TreeNode};
pub use subtract_square::SubtractSquare;
pub use tic_tac_toe::TicTacToe;

/// Inline capacity covers every reference game without spilling.
pub type MoveList<M> = SmallVec<[M; 16]>;

/// Identity of one of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// An immutable game state in a deterministic two-player zero-sum game.
pub trait Position: Clone {
    type Move: Clone + Debug;

    /// Player whose turn it is
    fn next_player(&self) -> PlayerId;

    /// Legal moves in a stable order. The order defines move indices, so equal
    /// positions must enumerate identically.
    fn legal_moves(&self) -> MoveList<Self::Move>;

    /// Position reached by playing `mv`. Does not modify `self`.
    fn apply_move(&self, mv: &Self::Move) -> Self;

    /// Whether the game is over
    fn is_terminal(&self) -> bool;

    /// Result from [`PlayerId::One`]'s point of view: 1.0 win, 0.0 draw,
    /// -1.0 loss. Only meaningful when [`Position::is_terminal`] holds.
    fn outcome(&self) -> f64;
}

/// Positions that can be identified by a collision-free key.
pub trait Canonical: Position {
    type Key: Eq + Hash + Clone + Debug;

    fn canonical_key(&self) -> Self::Key;
}
