// Score Model
//
// Game values live in the closed set {-1, 0, 1}: guaranteed loss, draw or win
// for the player to move under optimal continuation. Representing them as an
// enum keeps negation and max closed over the set and rules out signed zero.

use std::fmt;
use std::ops::Neg;

use crate::error::{SearchError, SearchResult};
use crate::game_repr::{PlayerId, Position};

/// Value of a position for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    Loss,
    Draw,
    Win,
}

impl Score {
    /// Starting bound for pruned search: nothing is guaranteed yet
    pub const WORST: Score = Score::Loss;

    /// Convert a raw terminal outcome. Both zeros map to a draw.
    pub fn from_outcome(value: f64) -> SearchResult<Self> {
        if value == 1.0 {
            Ok(Score::Win)
        } else if value == 0.0 {
            Ok(Score::Draw)
        } else if value == -1.0 {
            Ok(Score::Loss)
        } else {
            Err(SearchError::InvalidOutcome { value })
        }
    }

    /// Numeric value: exactly -1.0, 0.0 or 1.0, never -0.0
    pub fn as_f64(self) -> f64 {
        match self {
            Score::Loss => -1.0,
            Score::Draw => 0.0,
            Score::Win => 1.0,
        }
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        match self {
            Score::Loss => Score::Win,
            Score::Draw => Score::Draw,
            Score::Win => Score::Loss,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.as_f64())
    }
}

/// Score a finished game as `(mover, opponent)`, where mover is the player
/// recorded as next to move at the terminal position.
///
/// Fails with [`SearchError::NotTerminal`] if the game is not over, and with
/// [`SearchError::InvalidOutcome`] if the collaborator reports a result
/// outside {-1, 0, 1}.
pub fn score<P: Position>(position: &P) -> SearchResult<(Score, Score)> {
    if !position.is_terminal() {
        return Err(SearchError::NotTerminal);
    }

    let outcome = Score::from_outcome(position.outcome())?;
    Ok(match position.next_player() {
        PlayerId::One => (outcome, -outcome),
        PlayerId::Two => (-outcome, outcome),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{GameTree, SubtractSquare, TicTacToe, TreeNode};

    #[test]
    fn test_negation_is_closed() {
        assert_eq!(-Score::Win, Score::Loss);
        assert_eq!(-Score::Loss, Score::Win);
        assert_eq!(-Score::Draw, Score::Draw);
    }

    #[test]
    fn test_negated_draw_has_no_sign() {
        let value = (-Score::Draw).as_f64();
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_ordering() {
        assert!(Score::Loss < Score::Draw);
        assert!(Score::Draw < Score::Win);
        assert_eq!(Score::WORST, Score::Loss);
    }

    #[test]
    fn test_from_outcome() {
        assert_eq!(Score::from_outcome(1.0), Ok(Score::Win));
        assert_eq!(Score::from_outcome(-1.0), Ok(Score::Loss));
        assert_eq!(Score::from_outcome(0.0), Ok(Score::Draw));
        assert_eq!(Score::from_outcome(-0.0), Ok(Score::Draw));
        assert_eq!(
            Score::from_outcome(0.5),
            Err(SearchError::InvalidOutcome { value: 0.5 })
        );
        assert!(Score::from_outcome(f64::NAN).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::Win.to_string(), "1.0");
        assert_eq!(Score::Draw.to_string(), "0.0");
        assert_eq!(Score::Loss.to_string(), "-1.0");
    }

    #[test]
    fn test_score_orients_toward_mover() {
        // Player two to move at zero: player two lost
        let (mover, opponent) = score(&SubtractSquare::new(0, PlayerId::Two)).unwrap();
        assert_eq!((mover, opponent), (Score::Loss, Score::Win));

        let (mover, opponent) = score(&SubtractSquare::new(0, PlayerId::One)).unwrap();
        assert_eq!((mover, opponent), (Score::Loss, Score::Win));

        let won = TicTacToe::from_str_board("XXXOO....", PlayerId::Two).unwrap();
        assert_eq!(score(&won).unwrap(), (Score::Loss, Score::Win));
    }

    #[test]
    fn test_score_is_zero_sum() {
        for outcome in [-1.0, 0.0, 1.0] {
            for player in [PlayerId::One, PlayerId::Two] {
                let pos = GameTree::new(TreeNode::leaf(outcome), player);
                let (mover, opponent) = score(&pos).unwrap();
                assert_eq!(mover.as_f64() + opponent.as_f64(), 0.0);
            }
        }
    }

    #[test]
    fn test_score_rejects_unfinished_game() {
        let pos = SubtractSquare::new(3, PlayerId::One);
        assert_eq!(score(&pos), Err(SearchError::NotTerminal));
    }

    #[test]
    fn test_score_rejects_bad_outcome() {
        let pos = GameTree::new(TreeNode::leaf(2.0), PlayerId::One);
        assert_eq!(score(&pos), Err(SearchError::InvalidOutcome { value: 2.0 }));
    }
}
