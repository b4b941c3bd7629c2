//! Error types for the solver
//!
//! Every failure in this crate is a contract violation by the caller or by
//! the position collaborator. Nothing is transient and nothing is retried.

use thiserror::Error;

/// The two classes of contract violation a caller can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A collaborator or caller broke a precondition of a core operation
    Precondition,
    /// A move was requested from a position that has none
    InvalidState,
}

/// Errors that can occur while evaluating positions or selecting moves
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Score requested for a position that is not over
    #[error("cannot score a non-terminal position")]
    NotTerminal,

    /// Terminal outcome outside the closed set {-1, 0, 1}
    #[error("terminal outcome {value} is not one of -1, 0, 1")]
    InvalidOutcome { value: f64 },

    /// Move requested from a position that is already decided
    #[error("no move can be suggested from a terminal position")]
    TerminalPosition,

    /// A score map slot does not address the supplied move list
    #[error("move index {index} out of range for {available} legal moves")]
    MoveIndexOutOfRange { index: usize, available: usize },
}

impl SearchError {
    /// Classify this error as a precondition or an invalid-state failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::TerminalPosition => ErrorKind::InvalidState,
            SearchError::NotTerminal
            | SearchError::InvalidOutcome { .. }
            | SearchError::MoveIndexOutOfRange { .. } => ErrorKind::Precondition,
        }
    }
}

/// Result type alias for solver operations
pub type SearchResult<T> = Result<T, SearchError>;
