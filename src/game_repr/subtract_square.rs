use super::{Canonical, MoveList, PlayerId, Position};

/// Subtract-a-square: players alternately remove a positive perfect square
/// from a shared count. The player left facing zero has no move and loses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubtractSquare {
    value: u32,
    next_player: PlayerId,
}

impl SubtractSquare {
    pub fn new(value: u32, next_player: PlayerId) -> Self {
        Self { value, next_player }
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl Position for SubtractSquare {
    /// Amount to subtract
    type Move = u32;

    fn next_player(&self) -> PlayerId {
        self.next_player
    }

    fn legal_moves(&self) -> MoveList<u32> {
        (1u32..)
            .map_while(|root| root.checked_mul(root))
            .take_while(|&square| square <= self.value)
            .collect()
    }

    fn apply_move(&self, mv: &u32) -> Self {
        Self {
            value: self.value.saturating_sub(*mv),
            next_player: self.next_player.opponent(),
        }
    }

    fn is_terminal(&self) -> bool {
        self.value == 0
    }

    fn outcome(&self) -> f64 {
        // Whoever is to move at zero lost on the previous ply
        match self.next_player {
            PlayerId::One => -1.0,
            PlayerId::Two => 1.0,
        }
    }
}

impl Canonical for SubtractSquare {
    type Key = (u32, PlayerId);

    fn canonical_key(&self) -> Self::Key {
        (self.value, self.next_player)
    }
}
